use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// State-mutating operations gated by the authorizer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PrepareClaims,
    Claim,
    Migrate,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::PrepareClaims => "prepare_claims",
            Action::Claim => "claim",
            Action::Migrate => "migrate",
        };
        write!(f, "{}", name)
    }
}

pub mod msg {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    use super::Action;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum QueryMsg {
        /// Whether `caller` may perform `action` on the contract at `target`
        IsAuthorized {
            caller: String,
            target: String,
            action: Action,
        },
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct IsAuthorizedResponse {
        pub authorized: bool,
    }
}

pub mod helpers {
    use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmQuery};

    use super::msg::{IsAuthorizedResponse, QueryMsg};
    use super::Action;
    use crate::error::MigrationError;

    pub fn query_is_authorized(
        querier: &QuerierWrapper,
        authorizer_address: &Addr,
        caller: &Addr,
        target: &Addr,
        action: Action,
    ) -> StdResult<bool> {
        let query: IsAuthorizedResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: authorizer_address.to_string(),
            msg: to_binary(&QueryMsg::IsAuthorized {
                caller: caller.to_string(),
                target: target.to_string(),
                action,
            })?,
        }))?;

        Ok(query.authorized)
    }

    /// Fails with `Unauthorized` unless the authorizer grants `action` to `caller`
    pub fn assert_authorized(
        querier: &QuerierWrapper,
        authorizer_address: &Addr,
        caller: &Addr,
        target: &Addr,
        action: Action,
    ) -> Result<(), MigrationError> {
        let authorized =
            query_is_authorized(querier, authorizer_address, caller, target, action)
                .map_err(|err| MigrationError::external_failure("authorizer", err))?;

        if !authorized {
            return Err(MigrationError::Unauthorized {});
        }

        Ok(())
    }
}
