use std::collections::HashMap;

use cosmwasm_std::{
    to_binary, Addr, ContractResult, QuerierResult, SystemError, SystemResult, Uint128,
};
use cw20::{BalanceResponse, Cw20QueryMsg};

#[derive(Clone, Debug, Default)]
pub struct Cw20Querier {
    /// maps cw20 contract address to user balances
    pub balances: HashMap<Addr, HashMap<Addr, Uint128>>,
}

impl Cw20Querier {
    pub fn handle_cw20_query(&self, contract_addr: &Addr, query: Cw20QueryMsg) -> QuerierResult {
        let contract_balances = match self.balances.get(contract_addr) {
            Some(balances) => balances,
            None => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("[mock]: no balances available for cw20 {}", contract_addr),
                    request: Default::default(),
                })
            }
        };

        match query {
            Cw20QueryMsg::Balance { address } => {
                // accounts the token has never seen hold nothing
                let balance = contract_balances
                    .get(&Addr::unchecked(address))
                    .copied()
                    .unwrap_or_default();

                SystemResult::Ok(ContractResult::from(to_binary(&BalanceResponse {
                    balance,
                })))
            }

            other_query => SystemResult::Err(SystemError::InvalidRequest {
                error: format!("[mock]: cw20 query not supported {:?}", other_query),
                request: Default::default(),
            }),
        }
    }
}
