//! Query interface of a token that keeps per-block balance snapshots

use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Balance of `address` as of the end of `block`. Returns `cw20::BalanceResponse`
    BalanceAt { address: String, block: u64 },
    /// Total supply as of the end of `block`. Returns `TotalSupplyResponse`
    TotalSupplyAt { block: u64 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

pub mod helpers {
    use cosmwasm_std::{
        to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmQuery,
    };
    use cw20::BalanceResponse;

    use super::{QueryMsg, TotalSupplyResponse};

    pub fn query_balance_at(
        querier: &QuerierWrapper,
        token_address: &Addr,
        user_address: &Addr,
        block: u64,
    ) -> StdResult<Uint128> {
        let query: BalanceResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: token_address.to_string(),
            msg: to_binary(&QueryMsg::BalanceAt {
                address: user_address.to_string(),
                block,
            })?,
        }))?;

        Ok(query.balance)
    }

    pub fn query_total_supply_at(
        querier: &QuerierWrapper,
        token_address: &Addr,
        block: u64,
    ) -> StdResult<Uint128> {
        let query: TotalSupplyResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: token_address.to_string(),
            msg: to_binary(&QueryMsg::TotalSupplyAt { block })?,
        }))?;

        Ok(query.total_supply)
    }
}
