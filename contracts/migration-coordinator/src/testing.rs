use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::{Addr, Env, OwnedDeps, Timestamp, Uint128};

use migration_core::authorizer::Action;
use migration_core::coordinator::msg::{ExecuteMsg, InstantiateMsg};
use migration_core::coordinator::Organization;
use migration_core::testing::{
    mock_dependencies, mock_env, mock_info, MigrationMockQuerier, MockEnvParams,
};

use crate::contract::{execute, instantiate};

pub const WEEK: u64 = 7 * 24 * 60 * 60;
pub const VESTING_CLIFF_PERIOD: u64 = WEEK;
pub const VESTING_COMPLETE_PERIOD: u64 = 4 * WEEK;

pub const SNAPSHOT_BLOCK: u64 = 10_000;
pub const SNAPSHOT_TIME: u64 = 1_600_000_000;

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MigrationMockQuerier>;

pub fn th_organization() -> Organization<String> {
    Organization {
        grant_manager: "grant_manager".to_string(),
        vault_a: "vault_a".to_string(),
        vault_b: "vault_b".to_string(),
    }
}

/// Coordinator instantiated by "deployer" and initialized, every action open to anyone
pub fn th_setup() -> MockDeps {
    let mut deps = th_setup_uninitialized();
    execute(
        deps.as_mut(),
        mock_env(MockEnvParams::default()),
        mock_info("deployer"),
        ExecuteMsg::Initialize(th_organization()),
    )
    .unwrap();

    deps.querier.set_open_action(Action::PrepareClaims);
    deps.querier.set_open_action(Action::Claim);
    deps.querier.set_open_action(Action::Migrate);

    deps
}

pub fn th_setup_uninitialized() -> MockDeps {
    let mut deps = mock_dependencies(&[]);
    instantiate(
        deps.as_mut(),
        mock_env(MockEnvParams::default()),
        mock_info("deployer"),
        InstantiateMsg {
            authorizer: "authorizer".to_string(),
        },
    )
    .unwrap();
    deps
}

/// Old membership token "old_token" held by root (100), holder (90) and holder2 (10) at the
/// snapshot block
pub fn th_setup_snapshot_token(deps: &mut MockDeps) {
    deps.querier
        .set_snapshot_token_address(Addr::unchecked("old_token"));
    for (holder, balance) in [("root", 100u128), ("holder", 90), ("holder2", 10)] {
        deps.querier.set_snapshot_balance_at(
            Addr::unchecked(holder),
            SNAPSHOT_BLOCK,
            Uint128::new(balance),
        );
    }
    deps.querier
        .set_snapshot_total_supply_at(SNAPSHOT_BLOCK, Uint128::new(200));
}

pub fn snapshot_env() -> Env {
    mock_env(MockEnvParams {
        block_height: SNAPSHOT_BLOCK,
        block_time: Timestamp::from_seconds(SNAPSHOT_TIME),
    })
}

/// Claims prepared from "old_token" at the snapshot block, vesting starting at block time
pub fn th_setup_prepared() -> MockDeps {
    let mut deps = th_setup();
    th_setup_snapshot_token(&mut deps);
    execute(
        deps.as_mut(),
        snapshot_env(),
        mock_info("operator"),
        ExecuteMsg::PrepareClaims {
            token: "old_token".to_string(),
            vesting_start: None,
            vesting_cliff: VESTING_CLIFF_PERIOD,
            vesting_complete: VESTING_COMPLETE_PERIOD,
        },
    )
    .unwrap();
    deps
}
