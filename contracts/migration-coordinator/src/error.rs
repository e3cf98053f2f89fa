use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

use migration_core::error::MigrationError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Migration(#[from] MigrationError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Coordinator has already been initialized")]
    AlreadyInitialized {},

    #[error("Snapshot token must be a deployed contract")]
    NoSnapshotToken {},

    #[error("Percentage should be less or equal to one")]
    InvalidPercentage {},

    #[error("Invalid vesting schedule: {reason}")]
    InvalidVestingSchedule { reason: String },

    #[error("Claims have already been prepared")]
    AlreadyPrepared {},

    #[error("Claims have not been prepared")]
    NotPrepared {},

    #[error("Address has already claimed: {address}")]
    AlreadyClaimed { address: String },
}

impl ContractError {
    pub fn invalid_vesting_schedule<S: Into<String>>(reason: S) -> ContractError {
        ContractError::InvalidVestingSchedule {
            reason: reason.into(),
        }
    }
}
