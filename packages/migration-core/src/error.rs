use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MigrationError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Coordinator has not been initialized")]
    NotInitialized {},

    #[error("Call to {collaborator} failed: {reason}")]
    ExternalFailure { collaborator: String, reason: String },
}

impl MigrationError {
    /// Wraps an error returned by a collaborator contract, keeping the collaborator's name so
    /// the caller can tell which leg of the operation failed
    pub fn external_failure<S: Into<String>>(collaborator: S, err: StdError) -> MigrationError {
        MigrationError::ExternalFailure {
            collaborator: collaborator.into(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_failure_keeps_collaborator_and_reason() {
        let err = MigrationError::external_failure("vault_a", StdError::generic_err("boom"));
        assert_eq!(
            err,
            MigrationError::ExternalFailure {
                collaborator: "vault_a".to_string(),
                reason: "Generic error: boom".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Call to vault_a failed: Generic error: boom");
    }
}
