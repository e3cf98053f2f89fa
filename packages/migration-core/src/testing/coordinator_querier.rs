use std::collections::HashMap;

use cosmwasm_std::{to_binary, Addr, ContractResult, QuerierResult, SystemError, SystemResult};

use crate::coordinator::msg::QueryMsg;
use crate::coordinator::ClaimSetup;

/// Answers queries made to other coordinators (the target of a migration)
#[derive(Clone, Debug, Default)]
pub struct CoordinatorQuerier {
    /// maps coordinator address to its claim setup, absent while not prepared
    pub claim_setups: HashMap<Addr, ClaimSetup>,
}

impl CoordinatorQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        match query {
            QueryMsg::ClaimSetup {} => SystemResult::Ok(ContractResult::from(to_binary(
                &self.claim_setups.get(contract_addr),
            ))),

            other_query => SystemResult::Err(SystemError::InvalidRequest {
                error: format!("[mock]: coordinator query not supported {:?}", other_query),
                request: Default::default(),
            }),
        }
    }
}
