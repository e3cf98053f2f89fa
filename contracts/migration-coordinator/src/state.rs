use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use migration_core::coordinator::{ClaimSetup, ClaimStatus, Config, Organization};

pub const CONFIG: Item<Config> = Item::new("config");
/// Present once the coordinator is initialized
pub const ORGANIZATION: Item<Organization<Addr>> = Item::new("organization");
/// Present once claims are prepared, never overwritten
pub const CLAIM_SETUP: Item<ClaimSetup> = Item::new("claim_setup");
pub const CLAIM_STATUS: Item<ClaimStatus> = Item::new("claim_status");
/// Claim ledger: address => amount granted (zero for empty snapshot balances)
pub const CLAIMS: Map<&Addr, Uint128> = Map::new("claims");
