//! Test-only crate. The workflow suites live under `tests/`.
