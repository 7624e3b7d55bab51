//! Oracle access errors.

use crate::error::{ErrorSeverity, LoadoutError};

/// A required oracle was not supplied to the [`super::Env`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("AvatarOracle not available")]
    AvatarsNotAvailable,

    #[error("SubAffixRoller not available")]
    RollerNotAvailable,
}

impl LoadoutError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Missing oracles mean the host was wired incorrectly.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            AvatarsNotAvailable => "ORACLE_AVATARS_NOT_AVAILABLE",
            RollerNotAvailable => "ORACLE_ROLLER_NOT_AVAILABLE",
        }
    }
}
