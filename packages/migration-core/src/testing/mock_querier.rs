use std::collections::HashSet;

use cosmwasm_std::{
    from_binary, from_slice, testing::MockQuerier, Addr, Binary, Coin, ContractResult, Empty,
    Querier, QuerierResult, QueryRequest, StdResult, SystemError, SystemResult, Uint128,
    WasmQuery,
};
use cw20::Cw20QueryMsg;

use crate::authorizer::{self, Action};
use crate::coordinator::{self, ClaimSetup};
use crate::{grant_manager, snapshot_token};

use super::{
    authorizer_querier::AuthorizerQuerier, coordinator_querier::CoordinatorQuerier,
    cw20_querier::Cw20Querier, grant_manager_querier::GrantManagerQuerier,
    snapshot_token_querier::SnapshotTokenQuerier,
};

pub struct MigrationMockQuerier {
    base: MockQuerier<Empty>,
    /// addresses reported as deployed contracts by `WasmQuery::ContractInfo`
    contracts: HashSet<Addr>,
    authorizer_querier: AuthorizerQuerier,
    cw20_querier: Cw20Querier,
    snapshot_token_querier: SnapshotTokenQuerier,
    grant_manager_querier: GrantManagerQuerier,
    coordinator_querier: CoordinatorQuerier,
}

impl Querier for MigrationMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl MigrationMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        MigrationMockQuerier {
            base,
            contracts: HashSet::new(),
            authorizer_querier: AuthorizerQuerier::default(),
            cw20_querier: Cw20Querier::default(),
            snapshot_token_querier: SnapshotTokenQuerier::default(),
            grant_manager_querier: GrantManagerQuerier::default(),
            coordinator_querier: CoordinatorQuerier::default(),
        }
    }

    /// Report `address` as a deployed contract
    pub fn set_contract(&mut self, address: Addr) {
        self.contracts.insert(address);
    }

    /// Set native coin balances held by an account
    pub fn set_native_balances(&mut self, address: Addr, balances: &[Coin]) {
        self.base.update_balance(address, balances.to_vec());
    }

    /// Set mock querier balances results for a given cw20 token
    pub fn set_cw20_balances(&mut self, cw20_address: Addr, balances: &[(Addr, Uint128)]) {
        self.contracts.insert(cw20_address.clone());
        self.cw20_querier
            .balances
            .insert(cw20_address, balances.iter().cloned().collect());
    }

    /// Grant `action` to `caller`
    pub fn set_permission(&mut self, caller: Addr, action: Action) {
        self.authorizer_querier
            .permissions
            .insert((caller, action));
    }

    pub fn revoke_permission(&mut self, caller: Addr, action: Action) {
        self.authorizer_querier
            .permissions
            .remove(&(caller, action));
    }

    /// Grant `action` to any caller
    pub fn set_open_action(&mut self, action: Action) {
        self.authorizer_querier.open_actions.insert(action);
    }

    pub fn set_snapshot_token_address(&mut self, address: Addr) {
        self.contracts.insert(address.clone());
        self.snapshot_token_querier.token_address = address;
    }

    pub fn set_snapshot_balance_at(&mut self, address: Addr, block: u64, balance: Uint128) {
        self.snapshot_token_querier
            .balances_at
            .insert((address, block), balance);
    }

    pub fn set_snapshot_total_supply_at(&mut self, block: u64, total_supply: Uint128) {
        self.snapshot_token_querier
            .total_supplies_at
            .insert(block, total_supply);
    }

    pub fn set_grant_manager_token(&mut self, grant_manager: Addr, token: Addr) {
        self.grant_manager_querier.tokens.insert(grant_manager, token);
    }

    /// Set the claim setup another coordinator reports, `None` meaning not prepared
    pub fn set_coordinator_claim_setup(&mut self, coordinator: Addr, setup: Option<ClaimSetup>) {
        match setup {
            Some(setup) => self
                .coordinator_querier
                .claim_setups
                .insert(coordinator, setup),
            None => self.coordinator_querier.claim_setups.remove(&coordinator),
        };
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                let contract_addr = Addr::unchecked(contract_addr);

                // Authorizer Queries
                let parse_authorizer_query: StdResult<authorizer::msg::QueryMsg> =
                    from_binary(msg);
                if let Ok(authorizer_query) = parse_authorizer_query {
                    return self.authorizer_querier.handle_query(authorizer_query);
                }

                // Cw20 Queries
                let parse_cw20_query: StdResult<Cw20QueryMsg> = from_binary(msg);
                if let Ok(cw20_query) = parse_cw20_query {
                    return self
                        .cw20_querier
                        .handle_cw20_query(&contract_addr, cw20_query);
                }

                // Snapshot Token Queries
                let parse_snapshot_query: StdResult<snapshot_token::QueryMsg> = from_binary(msg);
                if let Ok(snapshot_query) = parse_snapshot_query {
                    return self
                        .snapshot_token_querier
                        .handle_query(&contract_addr, snapshot_query);
                }

                // Grant Manager Queries
                let parse_grant_manager_query: StdResult<grant_manager::msg::QueryMsg> =
                    from_binary(msg);
                if let Ok(grant_manager_query) = parse_grant_manager_query {
                    return self
                        .grant_manager_querier
                        .handle_query(&contract_addr, grant_manager_query);
                }

                // Coordinator Queries
                let parse_coordinator_query: StdResult<coordinator::msg::QueryMsg> =
                    from_binary(msg);
                if let Ok(coordinator_query) = parse_coordinator_query {
                    return self
                        .coordinator_querier
                        .handle_query(&contract_addr, coordinator_query);
                }

                panic!("[mock]: Unsupported wasm query: {:?}", msg);
            }

            QueryRequest::Wasm(WasmQuery::ContractInfo { contract_addr }) => {
                let address = Addr::unchecked(contract_addr);
                if !self.contracts.contains(&address) {
                    return SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.to_string(),
                    });
                }

                let info: &[u8] =
                    br#"{"code_id":1,"creator":"creator","admin":null,"pinned":false,"ibc_port":null}"#;
                SystemResult::Ok(ContractResult::Ok(Binary::from(info)))
            }

            _ => self.base.handle_query(request),
        }
    }
}
