use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::PayrollError;

/// Fractional-unit scale of the payable token (18 decimals).
pub const TOKEN_SCALE: u128 = 1_000_000_000_000_000_000;

/// Pool fixed at ledger creation: the maximum aggregate amount ever
/// claimable across all employees and all time.
pub const INITIAL_SUPPLY: u128 = 10_000 * TOKEN_SCALE;

/// One roster entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub id: u64,
    /// Account entitled to claim this employee's pay.
    pub account: Address,
    /// Amount payable per pay period.
    pub salary: u128,
    /// Next period index this employee may claim. Advances by exactly
    /// one on each successful claim.
    pub pay_period: u64,
    /// Cumulative amount claimed, not yet withdrawn externally.
    pub balance: u128,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger owner, fixed at initialization
    Owner,
    /// One-time initialization flag
    Initialized,
    /// Pool size fixed at initialization
    TotalSupply,
    /// Monotone sum of everything ever credited by claims
    TotalClaimed,
    /// Next id to allocate; never decremented, ids are never reused
    NextEmployeeId,
    /// Employee record by id
    Employee(u64),
    /// Reverse binding: account -> id, active employees only
    AccountId(Address),
    /// Ids of currently active employees; the employee count is the
    /// length of this list, not a separate counter
    ActiveIds,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner)
}

pub fn read_total_supply(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn read_total_claimed(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalClaimed)
        .unwrap_or(0)
}

pub fn write_total_claimed(env: &Env, claimed: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalClaimed, &claimed);
}

/// Allocates the next sequential employee id, starting at 1.
pub fn next_employee_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::NextEmployeeId)
        .unwrap_or(1);
    env.storage()
        .persistent()
        .set(&DataKey::NextEmployeeId, &(id + 1));
    id
}

pub fn read_employee(env: &Env, id: u64) -> Result<Employee, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::Employee(id))
        .ok_or(PayrollError::NotFound)
}

pub fn write_employee(env: &Env, employee: &Employee) {
    env.storage()
        .persistent()
        .set(&DataKey::Employee(employee.id), employee);
}

pub fn erase_employee(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Employee(id));
}

pub fn read_account_id(env: &Env, account: &Address) -> Result<u64, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::AccountId(account.clone()))
        .ok_or(PayrollError::NotFound)
}

pub fn account_is_bound(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::AccountId(account.clone()))
}

pub fn bind_account(env: &Env, account: &Address, id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::AccountId(account.clone()), &id);
}

pub fn unbind_account(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AccountId(account.clone()));
}

pub fn read_active_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveIds)
        .unwrap_or(Vec::new(env))
}

pub fn push_active_id(env: &Env, id: u64) {
    let mut ids = read_active_ids(env);
    ids.push_back(id);
    env.storage().persistent().set(&DataKey::ActiveIds, &ids);
}

pub fn drop_active_id(env: &Env, id: u64) {
    let mut ids = read_active_ids(env);
    if let Some(index) = ids.first_index_of(id) {
        ids.remove(index);
    }
    env.storage().persistent().set(&DataKey::ActiveIds, &ids);
}
