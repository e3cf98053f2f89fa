use cosmwasm_std::{Addr, Deps, Env, StdError, Storage};

use migration_core::authorizer::{self, Action};
use migration_core::coordinator::{ClaimSetup, Organization};
use migration_core::error::MigrationError;

use crate::error::ContractError;
use crate::state::{CLAIM_SETUP, CONFIG, ORGANIZATION};

pub fn load_organization(storage: &dyn Storage) -> Result<Organization<Addr>, ContractError> {
    ORGANIZATION
        .may_load(storage)?
        .ok_or_else(|| MigrationError::NotInitialized {}.into())
}

pub fn load_claim_setup(storage: &dyn Storage) -> Result<ClaimSetup, ContractError> {
    CLAIM_SETUP
        .may_load(storage)?
        .ok_or(ContractError::NotPrepared {})
}

/// Ask the authorizer whether `caller` may perform `action` on this coordinator
pub fn assert_authorized(
    deps: Deps,
    env: &Env,
    caller: &Addr,
    action: Action,
) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    authorizer::helpers::assert_authorized(
        &deps.querier,
        &config.authorizer,
        caller,
        &env.contract.address,
        action,
    )?;
    Ok(())
}

/// Tags a failed collaborator query so the error names the collaborator
pub fn external(collaborator: &'static str) -> impl Fn(StdError) -> ContractError {
    move |err| MigrationError::external_failure(collaborator, err).into()
}
