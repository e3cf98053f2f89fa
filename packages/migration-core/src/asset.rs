use std::fmt;

use cosmwasm_std::{
    to_binary, Addr, Api, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse, Cw20QueryMsg};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents either a native asset or a cw20. Meant to be used as part of a msg
/// in a contract call and not to be used internally
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    Cw20 { contract_addr: String },
    Native { denom: String },
}

impl Asset {
    /// Validate the cw20 contract address (native denoms are taken as they are)
    pub fn check(self, api: &dyn Api) -> StdResult<Asset> {
        match self {
            Asset::Cw20 { contract_addr } => Ok(Asset::Cw20 {
                contract_addr: api.addr_validate(&contract_addr)?.into_string(),
            }),
            native => Ok(native),
        }
    }

    /// Amount of this asset held by `account`, read from the asset's own ledger
    /// (bank module for native coins, token contract for cw20)
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            Asset::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            Asset::Cw20 { contract_addr } => {
                let query: BalanceResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                    contract_addr: contract_addr.to_string(),
                    msg: to_binary(&Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    })?,
                }))?;

                Ok(query.balance)
            }
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native { denom } => write!(f, "native:{}", denom),
            Asset::Cw20 { contract_addr } => write!(f, "cw20:{}", contract_addr),
        }
    }
}
