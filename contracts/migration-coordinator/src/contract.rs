#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use migration_core::coordinator::msg::{
    ClaimResponse, ClaimsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use migration_core::coordinator::{ClaimSetup, ClaimStatus, Config, Organization};
use migration_core::error::MigrationError;

use crate::claims::{execute_claim_for, execute_claim_for_many, execute_prepare_claims};
use crate::error::ContractError;
use crate::state::{CLAIMS, CLAIM_SETUP, CLAIM_STATUS, CONFIG, ORGANIZATION};
use crate::treasury::execute_migrate;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:migration-coordinator";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// INSTANTIATE

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        authorizer: deps.api.addr_validate(&msg.authorizer)?,
        instantiator: info.sender,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("authorizer", &config.authorizer))
}

// EXECUTE

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize(organization) => execute_initialize(deps, info, organization),
        ExecuteMsg::PrepareClaims {
            token,
            vesting_start,
            vesting_cliff,
            vesting_complete,
        } => execute_prepare_claims(
            deps,
            env,
            info,
            token,
            vesting_start,
            vesting_cliff,
            vesting_complete,
        ),
        ExecuteMsg::ClaimFor { address } => execute_claim_for(deps, env, info, address),
        ExecuteMsg::ClaimForMany { addresses } => {
            execute_claim_for_many(deps, env, info, addresses)
        }
        ExecuteMsg::Migrate(request) => execute_migrate(deps, env, info, request),
    }
}

/// Bind the grant manager and both vaults. Can only happen once
pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    organization: Organization<String>,
) -> Result<Response, ContractError> {
    if ORGANIZATION.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.instantiator {
        return Err(MigrationError::Unauthorized {}.into());
    }

    let organization = organization.check(deps.api)?;
    ORGANIZATION.save(deps.storage, &organization)?;

    Ok(Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("grant_manager", &organization.grant_manager)
        .add_attribute("vault_a", &organization.vault_a)
        .add_attribute("vault_b", &organization.vault_b))
}

// QUERIES

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::ClaimSetup {} => to_binary(&query_claim_setup(deps)?),
        QueryMsg::HasClaimed { address } => to_binary(&query_has_claimed(deps, address)?),
        QueryMsg::Claims { start_after, limit } => {
            to_binary(&query_claims(deps, start_after, limit)?)
        }
        QueryMsg::ClaimStatus {} => to_binary(&query_claim_status(deps)?),
        QueryMsg::CanPerformFurtherActions {} => {
            to_binary(&query_can_perform_further_actions(deps)?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        config: CONFIG.load(deps.storage)?,
        organization: ORGANIZATION.may_load(deps.storage)?,
    })
}

pub fn query_claim_setup(deps: Deps) -> StdResult<Option<ClaimSetup>> {
    CLAIM_SETUP.may_load(deps.storage)
}

pub fn query_has_claimed(deps: Deps, address: String) -> StdResult<ClaimResponse> {
    let address = deps.api.addr_validate(&address)?;
    let claimed = CLAIMS.may_load(deps.storage, &address)?;
    Ok(ClaimResponse {
        address,
        claimed: claimed.is_some(),
        amount: claimed.unwrap_or_default(),
    })
}

pub fn query_claims(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ClaimsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|address| deps.api.addr_validate(&address))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let claims = CLAIMS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, amount): (Addr, _) = item?;
            Ok(ClaimResponse {
                address,
                claimed: true,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ClaimsResponse { claims })
}

pub fn query_claim_status(deps: Deps) -> StdResult<Option<ClaimStatus>> {
    CLAIM_STATUS.may_load(deps.storage)
}

/// True once every holder of a nonzero snapshot balance has claimed
pub fn query_can_perform_further_actions(deps: Deps) -> StdResult<bool> {
    Ok(CLAIM_STATUS
        .may_load(deps.storage)?
        .map_or(false, |status| status.all_claimed()))
}

// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_binary, Uint128};
    use cw2::get_contract_version;
    use migration_core::testing::{mock_env, mock_info, MockEnvParams};
    use serde::de::DeserializeOwned;

    use crate::testing::{
        snapshot_env, th_organization, th_setup, th_setup_prepared, th_setup_uninitialized,
    };

    #[test]
    fn proper_instantiation() {
        let deps = th_setup_uninitialized();

        let res: ConfigResponse = query_helper(deps.as_ref(), QueryMsg::Config {});
        assert_eq!(
            res,
            ConfigResponse {
                config: Config {
                    authorizer: Addr::unchecked("authorizer"),
                    instantiator: Addr::unchecked("deployer"),
                },
                organization: None,
            }
        );

        let version = get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
        assert_eq!(version.version, CONTRACT_VERSION);
    }

    #[test]
    fn initializes_correctly() {
        let deps = th_setup();

        let res: ConfigResponse = query_helper(deps.as_ref(), QueryMsg::Config {});
        assert_eq!(
            res.organization,
            Some(Organization {
                grant_manager: Addr::unchecked("grant_manager"),
                vault_a: Addr::unchecked("vault_a"),
                vault_b: Addr::unchecked("vault_b"),
            })
        );
    }

    #[test]
    fn cannot_be_initialized_again() {
        let mut deps = th_setup();

        // same arguments
        let res = execute(
            deps.as_mut(),
            mock_env(MockEnvParams::default()),
            mock_info("deployer"),
            ExecuteMsg::Initialize(th_organization()),
        );
        assert_eq!(res, Err(ContractError::AlreadyInitialized {}));

        // different arguments, different caller
        let res = execute(
            deps.as_mut(),
            mock_env(MockEnvParams::default()),
            mock_info("anyone"),
            ExecuteMsg::Initialize(Organization {
                grant_manager: "other_grant_manager".to_string(),
                vault_a: "other_vault_a".to_string(),
                vault_b: "other_vault_b".to_string(),
            }),
        );
        assert_eq!(res, Err(ContractError::AlreadyInitialized {}));

        let res: ConfigResponse = query_helper(deps.as_ref(), QueryMsg::Config {});
        assert_eq!(
            res.organization.unwrap().grant_manager,
            Addr::unchecked("grant_manager")
        );
    }

    #[test]
    fn only_instantiator_can_initialize() {
        let mut deps = th_setup_uninitialized();

        let res = execute(
            deps.as_mut(),
            mock_env(MockEnvParams::default()),
            mock_info("anyone"),
            ExecuteMsg::Initialize(th_organization()),
        );
        assert_eq!(
            res,
            Err(ContractError::Migration(MigrationError::Unauthorized {}))
        );

        // empty addresses are rejected
        let res = execute(
            deps.as_mut(),
            mock_env(MockEnvParams::default()),
            mock_info("deployer"),
            ExecuteMsg::Initialize(Organization {
                vault_b: "".to_string(),
                ..th_organization()
            }),
        );
        assert!(matches!(res, Err(ContractError::Std(_))));

        let res = execute(
            deps.as_mut(),
            mock_env(MockEnvParams::default()),
            mock_info("deployer"),
            ExecuteMsg::Initialize(th_organization()),
        )
        .unwrap();
        assert_eq!(res.attributes[0].value, "initialize");
    }

    #[test]
    fn operations_require_initialization() {
        let mut deps = th_setup_uninitialized();
        let expected = Err(ContractError::Migration(MigrationError::NotInitialized {}));

        let msgs = vec![
            ExecuteMsg::PrepareClaims {
                token: "old_token".to_string(),
                vesting_start: None,
                vesting_cliff: 0,
                vesting_complete: 0,
            },
            ExecuteMsg::ClaimFor {
                address: "holder".to_string(),
            },
            ExecuteMsg::ClaimForMany {
                addresses: vec!["holder".to_string()],
            },
        ];
        for msg in msgs {
            let res = execute(deps.as_mut(), snapshot_env(), mock_info("operator"), msg);
            assert_eq!(res, expected);
        }
    }

    #[test]
    fn querying_claims() {
        let mut deps = th_setup_prepared();

        execute(
            deps.as_mut(),
            snapshot_env(),
            mock_info("anyone"),
            ExecuteMsg::ClaimForMany {
                addresses: vec![
                    "root".to_string(),
                    "holder2".to_string(),
                    "anyone".to_string(),
                ],
            },
        )
        .unwrap();

        let res: ClaimResponse = query_helper(
            deps.as_ref(),
            QueryMsg::HasClaimed {
                address: "holder2".to_string(),
            },
        );
        assert_eq!(
            res,
            ClaimResponse {
                address: Addr::unchecked("holder2"),
                claimed: true,
                amount: Uint128::new(10),
            }
        );

        let res: ClaimResponse = query_helper(
            deps.as_ref(),
            QueryMsg::HasClaimed {
                address: "holder".to_string(),
            },
        );
        assert!(!res.claimed);
        assert_eq!(res.amount, Uint128::zero());

        // ordered by address, paginated
        let res: ClaimsResponse = query_helper(
            deps.as_ref(),
            QueryMsg::Claims {
                start_after: None,
                limit: Some(2),
            },
        );
        let addresses: Vec<_> = res.claims.iter().map(|c| c.address.as_str()).collect();
        assert_eq!(addresses, vec!["anyone", "holder2"]);

        let res: ClaimsResponse = query_helper(
            deps.as_ref(),
            QueryMsg::Claims {
                start_after: Some("holder2".to_string()),
                limit: None,
            },
        );
        assert_eq!(
            res.claims,
            vec![ClaimResponse {
                address: Addr::unchecked("root"),
                claimed: true,
                amount: Uint128::new(100),
            }]
        );

        let res: Option<ClaimStatus> = query_helper(deps.as_ref(), QueryMsg::ClaimStatus {});
        assert_eq!(
            res,
            Some(ClaimStatus {
                snapshot_supply: Uint128::new(200),
                claimed_amount: Uint128::new(110),
                claimed_accounts: 3,
            })
        );
    }

    #[test]
    fn querying_before_claims_are_prepared() {
        let deps = th_setup();

        let res: Option<ClaimSetup> = query_helper(deps.as_ref(), QueryMsg::ClaimSetup {});
        assert_eq!(res, None);
        let res: Option<ClaimStatus> = query_helper(deps.as_ref(), QueryMsg::ClaimStatus {});
        assert_eq!(res, None);
        let res: bool = query_helper(deps.as_ref(), QueryMsg::CanPerformFurtherActions {});
        assert!(!res);
    }

    // TEST HELPERS

    fn query_helper<T: DeserializeOwned>(deps: Deps, msg: QueryMsg) -> T {
        from_binary(&query(deps, mock_env(MockEnvParams::default()), msg).unwrap()).unwrap()
    }
}
