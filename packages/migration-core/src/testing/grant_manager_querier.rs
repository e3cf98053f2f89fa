use std::collections::HashMap;

use cosmwasm_std::{to_binary, Addr, ContractResult, QuerierResult, SystemError, SystemResult};

use crate::grant_manager::msg::{QueryMsg, TokenResponse};

#[derive(Clone, Debug, Default)]
pub struct GrantManagerQuerier {
    /// maps grant manager address to the token it manages
    pub tokens: HashMap<Addr, Addr>,
}

impl GrantManagerQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        match query {
            QueryMsg::Token {} => match self.tokens.get(contract_addr) {
                Some(token) => SystemResult::Ok(ContractResult::from(to_binary(
                    &TokenResponse {
                        token: token.clone(),
                    },
                ))),
                None => SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("[mock]: no token for grant manager {}", contract_addr),
                    request: Default::default(),
                }),
            },
        }
    }
}
