use cosmwasm_std::{Addr, CosmosMsg, Decimal, DepsMut, Env, MessageInfo, Response, Uint128};

use migration_core::asset::Asset;
use migration_core::authorizer::Action;
use migration_core::coordinator::msg::MigrationRequest;
use migration_core::coordinator::Organization;
use migration_core::math::{less_or_equal_one, split_by_percentage};
use migration_core::{coordinator, grant_manager, vault};

use crate::error::ContractError;
use crate::helpers::{assert_authorized, external, load_organization};

/// Amounts moved from the source vaults (a, b) to the target vaults (a, b)
#[derive(Debug, PartialEq)]
pub struct TransferPlan {
    pub target_a: Uint128,
    pub target_b: Uint128,
    pub a_to_target_a: Uint128,
    pub a_to_target_b: Uint128,
    pub b_to_target_a: Uint128,
    pub b_to_target_b: Uint128,
}

/// Plans the transfers that empty both source vaults into the target vaults so that target
/// vault a ends up with `percentage` of the combined balance. At most one of the crossing
/// transfers (a => target b, b => target a) is nonzero.
pub fn plan_transfers(
    balance_a: Uint128,
    balance_b: Uint128,
    percentage: Decimal,
) -> Result<TransferPlan, ContractError> {
    let total = balance_a.checked_add(balance_b)?;
    let (target_a, target_b) = split_by_percentage(total, percentage)?;

    let plan = if balance_a >= target_a {
        TransferPlan {
            target_a,
            target_b,
            a_to_target_a: target_a,
            a_to_target_b: balance_a.checked_sub(target_a)?,
            b_to_target_a: Uint128::zero(),
            b_to_target_b: balance_b,
        }
    } else {
        let shortfall = target_a.checked_sub(balance_a)?;
        TransferPlan {
            target_a,
            target_b,
            a_to_target_a: balance_a,
            a_to_target_b: Uint128::zero(),
            b_to_target_a: shortfall,
            b_to_target_b: balance_b.checked_sub(shortfall)?,
        }
    };

    Ok(plan)
}

/// Moves the treasury into the target organization's vaults and prepares claims on its
/// coordinator. All messages belong to this transaction: if the target refuses to prepare
/// claims, the transfers are reverted with it.
pub fn execute_migrate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: MigrationRequest,
) -> Result<Response, ContractError> {
    let organization = load_organization(deps.storage)?;
    assert_authorized(deps.as_ref(), &env, &info.sender, Action::Migrate)?;

    if !less_or_equal_one(&request.percentage) {
        return Err(ContractError::InvalidPercentage {});
    }

    let target_coordinator = deps.api.addr_validate(&request.target_coordinator)?;
    let target_vault_a = deps.api.addr_validate(&request.target_vault_a)?;
    let target_vault_b = deps.api.addr_validate(&request.target_vault_b)?;
    let funds_asset = request.funds_asset.check(deps.api)?;

    // fail before moving anything when the target cannot take new claims
    let target_setup =
        coordinator::helpers::query_claim_setup(&deps.querier, &target_coordinator)
            .map_err(external("target_coordinator"))?;
    if target_setup.is_some() {
        return Err(ContractError::AlreadyPrepared {});
    }

    let balance_a = funds_asset
        .query_balance(&deps.querier, &organization.vault_a)
        .map_err(external("vault_a"))?;
    let balance_b = funds_asset
        .query_balance(&deps.querier, &organization.vault_b)
        .map_err(external("vault_b"))?;
    let plan = plan_transfers(balance_a, balance_b, request.percentage)?;

    let membership_token =
        grant_manager::helpers::query_token(&deps.querier, &organization.grant_manager)
            .map_err(external("grant_manager"))?;

    let mut messages = build_transfer_msgs(
        &organization,
        &funds_asset,
        &target_vault_a,
        &target_vault_b,
        &plan,
    )?;
    let transfers = messages.len();
    messages.push(coordinator::helpers::build_prepare_claims_msg(
        &target_coordinator,
        &membership_token,
        request.vesting_start,
        request.vesting_cliff,
        request.vesting_complete,
    )?);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "migrate")
        .add_attribute("target_coordinator", &target_coordinator)
        .add_attribute("funds_asset", funds_asset.to_string())
        .add_attribute("total", balance_a + balance_b)
        .add_attribute("target_a_amount", plan.target_a)
        .add_attribute("target_b_amount", plan.target_b)
        .add_attribute("transfers", transfers.to_string()))
}

fn build_transfer_msgs(
    organization: &Organization<Addr>,
    asset: &Asset,
    target_vault_a: &Addr,
    target_vault_b: &Addr,
    plan: &TransferPlan,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let transfers = [
        (&organization.vault_a, target_vault_a, plan.a_to_target_a),
        (&organization.vault_a, target_vault_b, plan.a_to_target_b),
        (&organization.vault_b, target_vault_a, plan.b_to_target_a),
        (&organization.vault_b, target_vault_b, plan.b_to_target_b),
    ];

    let mut messages = vec![];
    for (from, to, amount) in transfers {
        if amount.is_zero() {
            continue;
        }
        messages.push(vault::helpers::build_transfer_msg(from, asset, to, amount)?);
    }
    Ok(messages)
}
