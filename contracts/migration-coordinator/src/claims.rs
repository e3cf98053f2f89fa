use std::collections::HashSet;

use cosmwasm_std::{Addr, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use migration_core::authorizer::Action;
use migration_core::coordinator::{ClaimSetup, ClaimStatus, Organization};
use migration_core::{grant_manager, snapshot_token};

use crate::error::ContractError;
use crate::helpers::{assert_authorized, external, load_claim_setup, load_organization};
use crate::state::{CLAIMS, CLAIM_SETUP, CLAIM_STATUS};

/// Grants created from claims can be revoked by the new organization before they fully vest
const GRANTS_REVOCABLE: bool = true;

/// A validated claim, not yet written to the ledger
struct Claim {
    address: Addr,
    amount: Uint128,
}

pub fn execute_prepare_claims(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    vesting_start: Option<u64>,
    vesting_cliff: u64,
    vesting_complete: u64,
) -> Result<Response, ContractError> {
    load_organization(deps.storage)?;
    assert_authorized(deps.as_ref(), &env, &info.sender, Action::PrepareClaims)?;

    if CLAIM_SETUP.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyPrepared {});
    }

    let snapshot_token = validate_snapshot_token(deps.as_ref(), &token)?;

    // every claimant shares the same start date, so an unset one is resolved now and not at
    // claim time
    let vesting_start_date = match vesting_start {
        Some(start) if start != 0 => start,
        _ => env.block.time.seconds(),
    };
    validate_vesting_schedule(vesting_start_date, vesting_cliff, vesting_complete)?;

    let snapshot_block = env.block.height;
    let snapshot_supply = snapshot_token::helpers::query_total_supply_at(
        &deps.querier,
        &snapshot_token,
        snapshot_block,
    )
    .map_err(external("snapshot_token"))?;

    let setup = ClaimSetup {
        snapshot_token,
        snapshot_block,
        vesting_start_date,
        vesting_cliff_period: vesting_cliff,
        vesting_complete_period: vesting_complete,
    };
    CLAIM_SETUP.save(deps.storage, &setup)?;
    CLAIM_STATUS.save(deps.storage, &ClaimStatus::new(snapshot_supply))?;

    Ok(Response::new()
        .add_attribute("action", "prepare_claims")
        .add_attribute("snapshot_token", &setup.snapshot_token)
        .add_attribute("snapshot_block", setup.snapshot_block.to_string())
        .add_attribute("snapshot_supply", snapshot_supply)
        .add_attribute("vesting_start_date", setup.vesting_start_date.to_string())
        .add_attribute(
            "vesting_cliff_period",
            setup.vesting_cliff_period.to_string(),
        )
        .add_attribute(
            "vesting_complete_period",
            setup.vesting_complete_period.to_string(),
        ))
}

pub fn execute_claim_for(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let organization = load_organization(deps.storage)?;
    assert_authorized(deps.as_ref(), &env, &info.sender, Action::Claim)?;
    let setup = load_claim_setup(deps.storage)?;

    let address = deps.api.addr_validate(&address)?;
    let claim = validate_claim(deps.as_ref(), &setup, address)?;

    let mut status = CLAIM_STATUS.load(deps.storage)?;
    record_claim(deps, &mut status, &claim)?;

    let mut response = Response::new()
        .add_attribute("action", "claim_for")
        .add_attribute("account", &claim.address)
        .add_attribute("amount", claim.amount);
    if let Some(msg) = build_grant_msg(&organization, &setup, &claim)? {
        response = response.add_message(msg);
    }

    Ok(response)
}

/// Claims for every address in order. Every check and balance read happens before the first
/// ledger write, so a failing address leaves the ledger untouched
pub fn execute_claim_for_many(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    let organization = load_organization(deps.storage)?;
    assert_authorized(deps.as_ref(), &env, &info.sender, Action::Claim)?;
    let setup = load_claim_setup(deps.storage)?;

    let mut seen: HashSet<Addr> = HashSet::with_capacity(addresses.len());
    let mut claims = Vec::with_capacity(addresses.len());
    for address in addresses {
        let address = deps.api.addr_validate(&address)?;
        if !seen.insert(address.clone()) {
            return Err(ContractError::AlreadyClaimed {
                address: address.into_string(),
            });
        }
        claims.push(validate_claim(deps.as_ref(), &setup, address)?);
    }

    let mut status = CLAIM_STATUS.load(deps.storage)?;
    let mut messages: Vec<CosmosMsg> = vec![];
    let mut total_amount = Uint128::zero();
    let mut response = Response::new().add_attribute("action", "claim_for_many");
    for claim in &claims {
        record_claim(deps.branch(), &mut status, claim)?;
        total_amount = total_amount.checked_add(claim.amount)?;
        if let Some(msg) = build_grant_msg(&organization, &setup, claim)? {
            messages.push(msg);
        }
        response = response
            .add_attribute("account", &claim.address)
            .add_attribute("amount", claim.amount);
    }

    Ok(response
        .add_messages(messages)
        .add_attribute("accounts", claims.len().to_string())
        .add_attribute("total_amount", total_amount))
}

fn validate_snapshot_token(deps: Deps, token: &str) -> Result<Addr, ContractError> {
    let token = deps
        .api
        .addr_validate(token)
        .map_err(|_| ContractError::NoSnapshotToken {})?;

    // accounts that are not contracts cannot report balances at a past block
    deps.querier
        .query_wasm_contract_info(&token)
        .map_err(|_| ContractError::NoSnapshotToken {})?;

    Ok(token)
}

fn validate_vesting_schedule(
    vesting_start: u64,
    vesting_cliff: u64,
    vesting_complete: u64,
) -> Result<(), ContractError> {
    if vesting_cliff > vesting_complete {
        return Err(ContractError::invalid_vesting_schedule(
            "cliff period exceeds complete period",
        ));
    }
    if vesting_start.checked_add(vesting_complete).is_none() {
        return Err(ContractError::invalid_vesting_schedule(
            "vesting end overflows",
        ));
    }
    Ok(())
}

/// Rejects addresses already in the ledger and reads the balance held at the snapshot block
fn validate_claim(deps: Deps, setup: &ClaimSetup, address: Addr) -> Result<Claim, ContractError> {
    if CLAIMS.has(deps.storage, &address) {
        return Err(ContractError::AlreadyClaimed {
            address: address.into_string(),
        });
    }

    let amount = snapshot_token::helpers::query_balance_at(
        &deps.querier,
        &setup.snapshot_token,
        &address,
        setup.snapshot_block,
    )
    .map_err(external("snapshot_token"))?;

    Ok(Claim { address, amount })
}

/// Marks the address as claimed, zero balances included, so a claim can never be replayed
fn record_claim(
    deps: DepsMut,
    status: &mut ClaimStatus,
    claim: &Claim,
) -> Result<(), ContractError> {
    CLAIMS.save(deps.storage, &claim.address, &claim.amount)?;
    status.record(claim.amount)?;
    CLAIM_STATUS.save(deps.storage, status)?;
    Ok(())
}

fn build_grant_msg(
    organization: &Organization<Addr>,
    setup: &ClaimSetup,
    claim: &Claim,
) -> Result<Option<CosmosMsg>, ContractError> {
    if claim.amount.is_zero() {
        return Ok(None);
    }

    let msg = grant_manager::helpers::build_create_vested_grant_msg(
        &organization.grant_manager,
        &claim.address,
        claim.amount,
        setup.grant_schedule(),
        GRANTS_REVOCABLE,
    )?;
    Ok(Some(msg))
}
