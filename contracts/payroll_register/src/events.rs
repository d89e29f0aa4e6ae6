use soroban_sdk::{contractevent, Address, Env};

/// Event: employee registered
#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeAdded {
    pub id: u64,
    pub account: Address,
    pub salary: u128,
    pub pay_period: u64,
}

/// Event: employee removed, id retired
#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeRemoved {
    pub id: u64,
    pub account: Address,
}

/// Event: salary changed by the owner
#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryUpdated {
    pub id: u64,
    pub account: Address,
    pub new_salary: u128,
}

/// Event: pay-period cursor moved by the owner
#[contractevent]
#[derive(Clone, Debug)]
pub struct PaydayUpdated {
    pub id: u64,
    pub account: Address,
    pub new_period: u64,
}

/// Event: employee account rebound to a new address
#[contractevent]
#[derive(Clone, Debug)]
pub struct AccountRebound {
    pub id: u64,
    pub old_account: Address,
    pub new_account: Address,
}

/// Event: one pay period converted into accrued balance
#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryClaimed {
    pub id: u64,
    pub account: Address,
    pub amount: u128,
    pub period: u64,
}

pub fn emit_employee_added(e: &Env, event: EmployeeAdded) {
    event.publish(e);
}

pub fn emit_employee_removed(e: &Env, event: EmployeeRemoved) {
    event.publish(e);
}

pub fn emit_salary_updated(e: &Env, event: SalaryUpdated) {
    event.publish(e);
}

pub fn emit_payday_updated(e: &Env, event: PaydayUpdated) {
    event.publish(e);
}

pub fn emit_account_rebound(e: &Env, event: AccountRebound) {
    event.publish(e);
}

pub fn emit_salary_claimed(e: &Env, event: SalaryClaimed) {
    event.publish(e);
}
