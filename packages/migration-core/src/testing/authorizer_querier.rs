use std::collections::HashSet;

use cosmwasm_std::{to_binary, Addr, ContractResult, QuerierResult, SystemResult};

use crate::authorizer::msg::{IsAuthorizedResponse, QueryMsg};
use crate::authorizer::Action;

#[derive(Clone, Debug, Default)]
pub struct AuthorizerQuerier {
    /// (caller, action) pairs that are granted
    pub permissions: HashSet<(Addr, Action)>,
    /// actions granted to any caller
    pub open_actions: HashSet<Action>,
}

impl AuthorizerQuerier {
    pub fn handle_query(&self, query: QueryMsg) -> QuerierResult {
        match query {
            QueryMsg::IsAuthorized { caller, action, .. } => {
                let authorized = self.open_actions.contains(&action)
                    || self
                        .permissions
                        .contains(&(Addr::unchecked(caller), action));

                let res = IsAuthorizedResponse { authorized };
                SystemResult::Ok(ContractResult::from(to_binary(&res)))
            }
        }
    }
}
