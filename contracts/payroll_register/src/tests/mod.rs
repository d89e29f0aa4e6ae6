mod test_claims;

use crate::{PayrollRegisterContract, PayrollRegisterContractClient};
use soroban_sdk::Env;

pub(crate) fn create_register<'a>(e: &Env) -> PayrollRegisterContractClient<'a> {
    let contract_id = e.register(PayrollRegisterContract, ());
    PayrollRegisterContractClient::new(e, &contract_id)
}
