use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Absolute timestamps (in seconds) bounding a vested grant
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct GrantSchedule {
    /// Vesting starts
    pub start: u64,
    /// Nothing is releasable before this timestamp
    pub cliff: u64,
    /// Everything is releasable from this timestamp on
    pub vesting: u64,
}

pub mod msg {
    use cosmwasm_std::{Addr, Uint128};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum ExecuteMsg {
        /// Mint `amount` of the organization's token to `recipient` under a vesting schedule
        CreateVestedGrant {
            recipient: String,
            amount: Uint128,
            start: u64,
            cliff: u64,
            vesting: u64,
            revocable: bool,
        },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum QueryMsg {
        /// Membership token managed by this grant manager
        Token {},
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct TokenResponse {
        pub token: Addr,
    }
}

pub mod helpers {
    use cosmwasm_std::{
        to_binary, Addr, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, Uint128,
        WasmMsg, WasmQuery,
    };

    use super::msg::{ExecuteMsg, QueryMsg, TokenResponse};
    use super::GrantSchedule;

    pub fn query_token(querier: &QuerierWrapper, grant_manager_address: &Addr) -> StdResult<Addr> {
        let query: TokenResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: grant_manager_address.to_string(),
            msg: to_binary(&QueryMsg::Token {})?,
        }))?;

        Ok(query.token)
    }

    pub fn build_create_vested_grant_msg(
        grant_manager_address: &Addr,
        recipient: &Addr,
        amount: Uint128,
        schedule: GrantSchedule,
        revocable: bool,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: grant_manager_address.to_string(),
            msg: to_binary(&ExecuteMsg::CreateVestedGrant {
                recipient: recipient.to_string(),
                amount,
                start: schedule.start,
                cliff: schedule.cliff,
                vesting: schedule.vesting,
                revocable,
            })?,
            funds: vec![],
        }))
    }
}
