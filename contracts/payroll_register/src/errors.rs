use soroban_sdk::contracterror;

/// Errors surfaced by the payroll register.
///
/// Every failure is synchronous and leaves ledger state unchanged; the
/// kinds are distinguishable so callers can react differently (retry a
/// claim next period vs. treat `Unauthorized` as a permanent denial).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PayrollError {
    /// Caller lacks the required privilege (owner-only operation, or a
    /// claim from an account not bound to the employee).
    Unauthorized = 1,
    /// A null identity was supplied where a real account is required.
    InvalidAccount = 2,
    /// The account is already bound to an active employee.
    DuplicateEmployee = 3,
    /// The id or account does not reference an active employee.
    NotFound = 4,
    /// The claimed period does not match the employee's current cursor.
    WrongPeriod = 5,
    /// Remaining pool capacity cannot cover the requested claim.
    InsufficientFunds = 6,
}
