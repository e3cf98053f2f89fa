use cosmwasm_std::{Addr, Api, OverflowError, StdResult, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grant_manager::GrantSchedule;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// Contract answering capability checks for every state-mutating operation
    pub authorizer: Addr,
    /// Account that instantiated the coordinator, the only one allowed to initialize it
    pub instantiator: Addr,
}

/// Collaborators owned by the organization, bound once at initialization.
// T = String (unchecked) or Addr (checked)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Organization<T> {
    /// Mints vested grants of the organization's membership token
    pub grant_manager: T,
    /// First treasury vault
    pub vault_a: T,
    /// Second treasury vault
    pub vault_b: T,
}

impl Organization<String> {
    pub fn check(&self, api: &dyn Api) -> StdResult<Organization<Addr>> {
        Ok(Organization {
            grant_manager: api.addr_validate(&self.grant_manager)?,
            vault_a: api.addr_validate(&self.vault_a)?,
            vault_b: api.addr_validate(&self.vault_b)?,
        })
    }
}

impl From<Organization<Addr>> for Organization<String> {
    fn from(organization: Organization<Addr>) -> Self {
        Organization {
            grant_manager: organization.grant_manager.to_string(),
            vault_a: organization.vault_a.to_string(),
            vault_b: organization.vault_b.to_string(),
        }
    }
}

/// Snapshot and vesting parameters every claim is served from. Written once.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ClaimSetup {
    /// Token of the old organization whose balances are converted
    pub snapshot_token: Addr,
    /// Block at which balances are read
    pub snapshot_block: u64,
    /// Timestamp (in seconds) at which every grant starts vesting
    pub vesting_start_date: u64,
    /// Seconds after `vesting_start_date` before anything is releasable
    pub vesting_cliff_period: u64,
    /// Seconds after `vesting_start_date` after which everything is releasable
    pub vesting_complete_period: u64,
}

impl ClaimSetup {
    /// Absolute schedule shared by every grant created from this setup.
    /// `vesting_start_date + vesting_complete_period` is checked not to overflow when the setup
    /// is written, and the cliff period never exceeds the complete period
    pub fn grant_schedule(&self) -> GrantSchedule {
        GrantSchedule {
            start: self.vesting_start_date,
            cliff: self.vesting_start_date + self.vesting_cliff_period,
            vesting: self.vesting_start_date + self.vesting_complete_period,
        }
    }
}

/// Running totals of the claim ledger
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ClaimStatus {
    /// Total supply of the snapshot token at the snapshot block
    pub snapshot_supply: Uint128,
    /// Sum of all claimed amounts
    pub claimed_amount: Uint128,
    /// Number of addresses in the ledger, zero-balance claims included
    pub claimed_accounts: u64,
}

impl ClaimStatus {
    pub const fn new(snapshot_supply: Uint128) -> Self {
        Self {
            snapshot_supply,
            claimed_amount: Uint128::zero(),
            claimed_accounts: 0,
        }
    }

    pub fn record(&mut self, amount: Uint128) -> Result<(), OverflowError> {
        self.claimed_amount = self.claimed_amount.checked_add(amount)?;
        self.claimed_accounts += 1;
        Ok(())
    }

    /// Every holder of a nonzero snapshot balance has claimed. Claims are exact snapshot
    /// balances, so this holds once the claimed amount reaches the snapshot supply
    pub fn all_claimed(&self) -> bool {
        self.claimed_amount >= self.snapshot_supply
    }
}

pub mod msg {
    use cosmwasm_std::{Addr, Decimal, Uint128};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    use super::{Config, Organization};
    use crate::asset::Asset;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct InstantiateMsg {
        pub authorizer: String,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum ExecuteMsg {
        /// Bind the organization's grant manager and vaults. Only once, only by the instantiator
        Initialize(Organization<String>),
        /// Fix the snapshot token, the snapshot block (current block) and the vesting schedule
        PrepareClaims {
            token: String,
            /// Defaults to the current block time when absent or zero
            vesting_start: Option<u64>,
            vesting_cliff: u64,
            vesting_complete: u64,
        },
        /// Convert the snapshot balance of `address` into a vested grant
        ClaimFor { address: String },
        /// Same as `ClaimFor` for every address, all or nothing
        ClaimForMany { addresses: Vec<String> },
        /// Move the treasury into the target vaults and prepare claims on the target coordinator
        Migrate(MigrationRequest),
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct MigrationRequest {
        /// Coordinator of the organization receiving members and funds
        pub target_coordinator: String,
        pub target_vault_a: String,
        pub target_vault_b: String,
        /// Asset whose vault balances are moved
        pub funds_asset: Asset,
        /// Share of the combined treasury ending up in `target_vault_a` (1 = 100%)
        pub percentage: Decimal,
        pub vesting_start: Option<u64>,
        pub vesting_cliff: u64,
        pub vesting_complete: u64,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum QueryMsg {
        /// Returns `ConfigResponse`
        Config {},
        /// Returns `Option<ClaimSetup>`, null until claims are prepared
        ClaimSetup {},
        /// Returns `ClaimResponse`
        HasClaimed { address: String },
        /// Returns `ClaimsResponse`, ordered by address
        Claims {
            start_after: Option<String>,
            limit: Option<u32>,
        },
        /// Returns `Option<ClaimStatus>`, null until claims are prepared
        ClaimStatus {},
        /// Returns `bool`
        CanPerformFurtherActions {},
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct ConfigResponse {
        pub config: Config,
        /// None until the coordinator is initialized
        pub organization: Option<Organization<Addr>>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct ClaimResponse {
        pub address: Addr,
        pub claimed: bool,
        pub amount: Uint128,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct ClaimsResponse {
        pub claims: Vec<ClaimResponse>,
    }
}

pub mod helpers {
    use cosmwasm_std::{
        to_binary, Addr, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, WasmMsg,
        WasmQuery,
    };

    use super::msg::{ExecuteMsg, QueryMsg};
    use super::ClaimSetup;

    pub fn query_claim_setup(
        querier: &QuerierWrapper,
        coordinator_address: &Addr,
    ) -> StdResult<Option<ClaimSetup>> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: coordinator_address.to_string(),
            msg: to_binary(&QueryMsg::ClaimSetup {})?,
        }))
    }

    pub fn build_prepare_claims_msg(
        coordinator_address: &Addr,
        token: &Addr,
        vesting_start: Option<u64>,
        vesting_cliff: u64,
        vesting_complete: u64,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: coordinator_address.to_string(),
            msg: to_binary(&ExecuteMsg::PrepareClaims {
                token: token.to_string(),
                vesting_start,
                vesting_cliff,
                vesting_complete,
            })?,
            funds: vec![],
        }))
    }
}
