#![no_std]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use errors::PayrollError;
pub use storage::{Employee, INITIAL_SUPPLY, TOKEN_SCALE};

use events::{
    emit_account_rebound, emit_employee_added, emit_employee_removed, emit_payday_updated,
    emit_salary_claimed, emit_salary_updated, AccountRebound, EmployeeAdded, EmployeeRemoved,
    PaydayUpdated, SalaryClaimed, SalaryUpdated,
};

/// PayrollRegister Contract: an on-ledger payroll register.
///
/// Tracks a fixed pool of payable token units, a roster of employees
/// with per-employee salary, pay-period cursor, and accrued balance,
/// and enforces who may mutate what and when.
///
/// # Security Model
///
/// - Only the owner (fixed at initialization) can register, remove, or
///   reconfigure employees
/// - Only the account bound to an employee can claim its pay, one
///   period at a time, strictly in order
/// - The sum of everything ever claimed never exceeds the pool fixed at
///   initialization
/// - Employee ids are allocated sequentially and never reused, so a
///   retired id can never be confused with a later hire
///
/// Token settlement is out of scope: `balance` is an internal accrual
/// ledger and any external withdrawal mechanism is a separate
/// collaborator.
#[contract]
pub struct PayrollRegisterContract;

fn require_initialized(env: &Env) {
    assert!(storage::is_initialized(env), "Contract not initialized");
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), PayrollError> {
    match storage::read_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(PayrollError::Unauthorized),
    }
}

#[contractimpl]
impl PayrollRegisterContract {
    /// Initializes the payroll register.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `owner` - The owner address (must authenticate); the only
    ///   identity allowed to run roster mutations
    ///
    /// # Requirements
    ///
    /// * Contract must not be already initialized
    ///
    /// The pool is fixed here: `total_supply` is set to
    /// [`INITIAL_SUPPLY`] and never changes afterwards.
    pub fn initialize(env: Env, owner: Address) {
        owner.require_auth();

        assert!(
            !storage::is_initialized(&env),
            "Contract already initialized"
        );

        env.storage()
            .persistent()
            .set(&storage::DataKey::Owner, &owner);
        env.storage()
            .persistent()
            .set(&storage::DataKey::TotalSupply, &INITIAL_SUPPLY);
        env.storage()
            .persistent()
            .set(&storage::DataKey::TotalClaimed, &0u128);
        env.storage()
            .persistent()
            .set(&storage::DataKey::Initialized, &true);
    }

    /// Registers a new employee and binds its account.
    ///
    /// # Arguments
    ///
    /// * `caller` - Must be the owner (must authenticate)
    /// * `account` - Account entitled to claim; `None` models the null
    ///   identity and is rejected
    /// * `salary` - Amount payable per pay period
    /// * `pay_period` - First period index this employee may claim
    ///
    /// # Returns
    ///
    /// The newly allocated employee id (sequential from 1).
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - caller is not the owner
    /// * `InvalidAccount` - `account` is `None`
    /// * `DuplicateEmployee` - `account` is already bound
    ///
    /// No funds move; the new employee starts with balance 0.
    pub fn add_employee(
        env: Env,
        caller: Address,
        account: Option<Address>,
        salary: u128,
        pay_period: u64,
    ) -> Result<u64, PayrollError> {
        require_initialized(&env);
        caller.require_auth();
        require_owner(&env, &caller)?;

        let account = account.ok_or(PayrollError::InvalidAccount)?;
        if storage::account_is_bound(&env, &account) {
            return Err(PayrollError::DuplicateEmployee);
        }

        let id = storage::next_employee_id(&env);
        let employee = Employee {
            id,
            account: account.clone(),
            salary,
            pay_period,
            balance: 0,
        };

        storage::write_employee(&env, &employee);
        storage::bind_account(&env, &account, id);
        storage::push_active_id(&env, id);

        emit_employee_added(
            &env,
            EmployeeAdded {
                id,
                account,
                salary,
                pay_period,
            },
        );

        Ok(id)
    }

    /// Removes an employee and permanently retires its id.
    ///
    /// Erases both the id -> record and account -> id bindings;
    /// subsequent lookups by either fail with `NotFound`.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - caller is not the owner
    /// * `NotFound` - id does not reference an active employee
    pub fn remove_employee(env: Env, caller: Address, id: u64) -> Result<(), PayrollError> {
        require_initialized(&env);
        caller.require_auth();
        require_owner(&env, &caller)?;

        let employee = storage::read_employee(&env, id)?;

        storage::unbind_account(&env, &employee.account);
        storage::erase_employee(&env, id);
        storage::drop_active_id(&env, id);

        emit_employee_removed(
            &env,
            EmployeeRemoved {
                id,
                account: employee.account,
            },
        );

        Ok(())
    }

    /// Changes an employee's salary. Owner-only.
    pub fn set_employee_salary(
        env: Env,
        caller: Address,
        id: u64,
        new_salary: u128,
    ) -> Result<(), PayrollError> {
        require_initialized(&env);
        caller.require_auth();
        require_owner(&env, &caller)?;

        let mut employee = storage::read_employee(&env, id)?;
        employee.salary = new_salary;
        storage::write_employee(&env, &employee);

        emit_salary_updated(
            &env,
            SalaryUpdated {
                id,
                account: employee.account,
                new_salary,
            },
        );

        Ok(())
    }

    /// Moves an employee's pay-period cursor, looked up by account.
    /// Owner-only.
    pub fn set_employee_payday(
        env: Env,
        caller: Address,
        account: Address,
        new_period: u64,
    ) -> Result<(), PayrollError> {
        require_initialized(&env);
        caller.require_auth();
        require_owner(&env, &caller)?;

        let id = storage::read_account_id(&env, &account)?;
        let mut employee = storage::read_employee(&env, id)?;
        employee.pay_period = new_period;
        storage::write_employee(&env, &employee);

        emit_payday_updated(
            &env,
            PaydayUpdated {
                id,
                account,
                new_period,
            },
        );

        Ok(())
    }

    /// Rebinds an employee to a new account.
    ///
    /// A pure identity change: id, salary, pay-period cursor, and
    /// balance are untouched, so a later claim from the new account
    /// runs against the existing record. Both mapping directions are
    /// updated in the same invocation; the old account becomes unbound.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - caller is not the owner
    /// * `NotFound` - id does not reference an active employee
    /// * `InvalidAccount` - `new_account` is `None`
    /// * `DuplicateEmployee` - `new_account` is already bound
    pub fn set_employee_address(
        env: Env,
        caller: Address,
        id: u64,
        new_account: Option<Address>,
    ) -> Result<(), PayrollError> {
        require_initialized(&env);
        caller.require_auth();
        require_owner(&env, &caller)?;

        let mut employee = storage::read_employee(&env, id)?;

        let new_account = new_account.ok_or(PayrollError::InvalidAccount)?;
        if storage::account_is_bound(&env, &new_account) {
            return Err(PayrollError::DuplicateEmployee);
        }

        let old_account = employee.account.clone();
        storage::unbind_account(&env, &old_account);
        storage::bind_account(&env, &new_account, id);
        employee.account = new_account.clone();
        storage::write_employee(&env, &employee);

        emit_account_rebound(
            &env,
            AccountRebound {
                id,
                old_account,
                new_account,
            },
        );

        Ok(())
    }

    /// Claims the pay for one period: the self-service operation.
    ///
    /// # Arguments
    ///
    /// * `caller` - Must be the account currently bound to `id` (must
    ///   authenticate)
    /// * `id` - Employee id
    /// * `requested_period` - Must equal the employee's current cursor
    ///   exactly; periods are claimed strictly in order, exactly once
    ///
    /// # Returns
    ///
    /// The amount credited (the employee's salary).
    ///
    /// # Errors
    ///
    /// * `NotFound` - id does not reference an active employee
    /// * `Unauthorized` - caller is not the bound account
    /// * `WrongPeriod` - `requested_period` does not match the cursor
    /// * `InsufficientFunds` - salary exceeds remaining pool capacity,
    ///   or the supply accounting would overflow
    ///
    /// On success `balance` and the cursor advance together; no other
    /// employee's state changes.
    pub fn claim(
        env: Env,
        caller: Address,
        id: u64,
        requested_period: u64,
    ) -> Result<u128, PayrollError> {
        require_initialized(&env);
        caller.require_auth();

        let mut employee = storage::read_employee(&env, id)?;
        if employee.account != caller {
            return Err(PayrollError::Unauthorized);
        }
        if requested_period != employee.pay_period {
            return Err(PayrollError::WrongPeriod);
        }

        let claimed = storage::read_total_claimed(&env);
        let capacity = storage::read_total_supply(&env)
            .checked_sub(claimed)
            .unwrap_or(0);
        if employee.salary > capacity {
            return Err(PayrollError::InsufficientFunds);
        }

        let new_claimed = claimed
            .checked_add(employee.salary)
            .ok_or(PayrollError::InsufficientFunds)?;
        employee.balance = employee
            .balance
            .checked_add(employee.salary)
            .ok_or(PayrollError::InsufficientFunds)?;
        employee.pay_period += 1;

        storage::write_employee(&env, &employee);
        storage::write_total_claimed(&env, new_claimed);

        emit_salary_claimed(
            &env,
            SalaryClaimed {
                id,
                account: employee.account.clone(),
                amount: employee.salary,
                period: requested_period,
            },
        );

        Ok(employee.salary)
    }

    // ---- Read accessors ----

    /// Number of currently active employees.
    pub fn get_employee_count(env: Env) -> u32 {
        storage::read_active_ids(&env).len()
    }

    /// Pool size fixed at initialization.
    pub fn get_total_supply(env: Env) -> u128 {
        storage::read_total_supply(&env)
    }

    /// Full employee record by id.
    pub fn get_employee(env: Env, id: u64) -> Result<Employee, PayrollError> {
        storage::read_employee(&env, id)
    }

    /// Employee id bound to an account.
    pub fn get_employee_id(env: Env, account: Address) -> Result<u64, PayrollError> {
        storage::read_account_id(&env, &account)
    }

    /// Account bound to an employee id.
    pub fn get_employee_account(env: Env, id: u64) -> Result<Address, PayrollError> {
        Ok(storage::read_employee(&env, id)?.account)
    }

    /// Salary of the employee bound to an account.
    pub fn get_employee_salary(env: Env, account: Address) -> Result<u128, PayrollError> {
        let id = storage::read_account_id(&env, &account)?;
        Ok(storage::read_employee(&env, id)?.salary)
    }

    /// Current pay-period cursor of the employee bound to an account.
    pub fn get_employee_payday(env: Env, account: Address) -> Result<u64, PayrollError> {
        let id = storage::read_account_id(&env, &account)?;
        Ok(storage::read_employee(&env, id)?.pay_period)
    }

    /// Accrued balance by employee id.
    pub fn get_employee_balance(env: Env, id: u64) -> Result<u128, PayrollError> {
        Ok(storage::read_employee(&env, id)?.balance)
    }

    /// Sum of everything ever credited by claims.
    pub fn get_total_claimed(env: Env) -> u128 {
        storage::read_total_claimed(&env)
    }

    /// Remaining claimable capacity: total supply minus everything ever
    /// claimed. Removal of an employee does not return claimed funds to
    /// the pool.
    pub fn get_remaining_capacity(env: Env) -> u128 {
        storage::read_total_supply(&env)
            .checked_sub(storage::read_total_claimed(&env))
            .unwrap_or(0)
    }

    /// Returns the ledger owner.
    pub fn get_owner(env: Env) -> Option<Address> {
        storage::read_owner(&env)
    }
}
