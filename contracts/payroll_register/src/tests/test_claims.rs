use super::create_register;
use crate::{PayrollError, INITIAL_SUPPLY, TOKEN_SCALE};
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_non_bound_caller_cannot_claim() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let employee_b = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a), &10, &1);

    assert_eq!(
        client.try_claim(&employee_b, &1, &1),
        Err(Ok(PayrollError::Unauthorized))
    );
    assert_eq!(client.get_employee_balance(&1), 0);
}

#[test]
fn test_claim_unknown_id_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    assert_eq!(
        client.try_claim(&stranger, &1, &1),
        Err(Ok(PayrollError::NotFound))
    );
}

#[test]
fn test_claim_credits_balance_and_advances_period() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &10, &1);

    let credited = client.claim(&employee_a, &1, &1);
    assert_eq!(credited, 10);
    assert_eq!(client.get_employee_balance(&1), 10);
    assert_eq!(client.get_employee_payday(&employee_a), 2);
    assert_eq!(client.get_total_claimed(), 10);
    assert_eq!(client.get_remaining_capacity(), INITIAL_SUPPLY - 10);
}

#[test]
fn test_claim_wrong_period_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &10, &1);

    // Not >= and not unordered: the gate is an exact match
    assert_eq!(
        client.try_claim(&employee_a, &1, &2),
        Err(Ok(PayrollError::WrongPeriod))
    );
    assert_eq!(
        client.try_claim(&employee_a, &1, &0),
        Err(Ok(PayrollError::WrongPeriod))
    );
    assert_eq!(client.get_employee_balance(&1), 0);
    assert_eq!(client.get_employee_payday(&employee_a), 1);
}

#[test]
fn test_period_cannot_be_claimed_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &10, &1);
    client.claim(&employee_a, &1, &1);

    assert_eq!(
        client.try_claim(&employee_a, &1, &1),
        Err(Ok(PayrollError::WrongPeriod))
    );

    // The next period is claimable in order
    client.claim(&employee_a, &1, &2);
    assert_eq!(client.get_employee_balance(&1), 20);
    assert_eq!(client.get_employee_payday(&employee_a), 3);
}

#[test]
fn test_claim_exceeding_pool_capacity_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    // Salary larger than the whole pool
    let crazy_salary = 50_000 * TOKEN_SCALE;
    client.add_employee(&owner, &Some(employee_a.clone()), &crazy_salary, &1);

    assert_eq!(
        client.try_claim(&employee_a, &1, &1),
        Err(Ok(PayrollError::InsufficientFunds))
    );
    // Rejected up front, not partially paid
    assert_eq!(client.get_employee_balance(&1), 0);
    assert_eq!(client.get_employee_payday(&employee_a), 1);
    assert_eq!(client.get_total_claimed(), 0);
}

#[test]
fn test_pool_can_be_drained_exactly_once() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &INITIAL_SUPPLY, &1);

    // A salary equal to the full remaining capacity is payable
    assert_eq!(client.claim(&employee_a, &1, &1), INITIAL_SUPPLY);
    assert_eq!(client.get_remaining_capacity(), 0);

    // Nothing is left for the next period
    assert_eq!(
        client.try_claim(&employee_a, &1, &2),
        Err(Ok(PayrollError::InsufficientFunds))
    );
}

#[test]
fn test_zero_salary_claim_succeeds_on_empty_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let employee_b = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &INITIAL_SUPPLY, &1);
    client.add_employee(&owner, &Some(employee_b.clone()), &0, &1);
    client.claim(&employee_a, &1, &1);

    // Zero never exceeds the remaining capacity
    assert_eq!(client.claim(&employee_b, &2, &1), 0);
    assert_eq!(client.get_employee_payday(&employee_b), 2);
}

#[test]
fn test_claim_after_rebinding_runs_against_existing_record() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let employee_b = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &10, &1);
    client.claim(&employee_a, &1, &1);

    client.set_employee_address(&owner, &1, &Some(employee_b.clone()));

    // The old account lost the claim privilege
    assert_eq!(
        client.try_claim(&employee_a, &1, &2),
        Err(Ok(PayrollError::Unauthorized))
    );

    // The new account continues from the same cursor and balance
    client.claim(&employee_b, &1, &2);
    assert_eq!(client.get_employee_balance(&1), 20);
    assert_eq!(client.get_employee_payday(&employee_b), 3);
}

#[test]
fn test_removal_does_not_refund_claimed_funds() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &100, &1);
    client.claim(&employee_a, &1, &1);
    client.remove_employee(&owner, &1);

    // The pool tracks everything ever claimed, across all time
    assert_eq!(client.get_total_claimed(), 100);
    assert_eq!(client.get_remaining_capacity(), INITIAL_SUPPLY - 100);
}

#[test]
fn test_claim_isolated_between_employees() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let employee_a = Address::generate(&env);
    let employee_b = Address::generate(&env);
    let client = create_register(&env);
    client.initialize(&owner);

    client.add_employee(&owner, &Some(employee_a.clone()), &10, &1);
    client.add_employee(&owner, &Some(employee_b.clone()), &25, &3);

    client.claim(&employee_a, &1, &1);

    // No other employee's state changes
    assert_eq!(client.get_employee_balance(&2), 0);
    assert_eq!(client.get_employee_payday(&employee_b), 3);
}
