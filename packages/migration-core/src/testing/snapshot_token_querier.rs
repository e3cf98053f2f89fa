use std::collections::HashMap;

use cosmwasm_std::{
    to_binary, Addr, ContractResult, QuerierResult, SystemError, SystemResult, Uint128,
};
use cw20::BalanceResponse;

use crate::snapshot_token::{QueryMsg, TotalSupplyResponse};

#[derive(Clone, Debug)]
pub struct SnapshotTokenQuerier {
    /// snapshot token address to be used in queries
    pub token_address: Addr,
    /// maps human address and a block to a specific balance
    pub balances_at: HashMap<(Addr, u64), Uint128>,
    /// maps block to a specific total supply
    pub total_supplies_at: HashMap<u64, Uint128>,
}

impl Default for SnapshotTokenQuerier {
    fn default() -> Self {
        SnapshotTokenQuerier {
            token_address: Addr::unchecked(""),
            balances_at: HashMap::new(),
            total_supplies_at: HashMap::new(),
        }
    }
}

impl SnapshotTokenQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        if contract_addr != &self.token_address {
            panic!(
                "[mock]: made a snapshot token query but token address is incorrect, was: {}, should be {}",
                contract_addr, self.token_address
            );
        }

        match query {
            QueryMsg::BalanceAt { address, block } => {
                // holders without a recorded balance at that block hold nothing
                let balance = self
                    .balances_at
                    .get(&(Addr::unchecked(address), block))
                    .copied()
                    .unwrap_or_default();

                SystemResult::Ok(ContractResult::from(to_binary(&BalanceResponse {
                    balance,
                })))
            }

            QueryMsg::TotalSupplyAt { block } => match self.total_supplies_at.get(&block) {
                Some(total_supply) => SystemResult::Ok(ContractResult::from(to_binary(
                    &TotalSupplyResponse {
                        total_supply: *total_supply,
                    },
                ))),
                None => SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("[mock]: no total supply at block {}", block),
                    request: Default::default(),
                }),
            },
        }
    }
}
