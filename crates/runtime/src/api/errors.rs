//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from oracle wiring, repositories, and argument handling so
//! clients can bubble them up with consistent context. Build-level failures
//! never appear here; they are reported through [`crate::ApplyOutcome`].
use loadout_core::{ErrorSeverity, LoadoutError, OracleError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("build applier requires every oracle to be configured")]
    MissingOracle(#[source] OracleError),

    #[error("invalid build arguments: {0}")]
    InvalidArguments(String),
}

impl From<OracleError> for RuntimeError {
    fn from(err: OracleError) -> Self {
        Self::MissingOracle(err)
    }
}

impl LoadoutError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::MissingOracle(_) => ErrorSeverity::Fatal,
            Self::InvalidArguments(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::MissingOracle(_) => "RUNTIME_MISSING_ORACLE",
            Self::InvalidArguments(_) => "RUNTIME_INVALID_ARGUMENTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiring_failures_are_fatal_and_storage_failures_internal() {
        let missing = RuntimeError::from(OracleError::RollerNotAvailable);
        assert_eq!(missing.severity(), ErrorSeverity::Fatal);
        assert!(missing.severity().is_internal());

        let storage = RuntimeError::from(RepositoryError::LockPoisoned);
        assert_eq!(storage.severity(), ErrorSeverity::Internal);
        assert_eq!(storage.error_code(), "RUNTIME_REPOSITORY");

        let args = RuntimeError::InvalidArguments("usage".into());
        assert_eq!(args.severity().as_str(), "validation");
    }
}
