//! Common error infrastructure for loadout-core.
//!
//! This module provides the severity classification shared by every error in
//! the crate and the [`BuildError`] taxonomy used while resolving and applying
//! builds. None of the build errors abort an invocation: callers log them,
//! skip the affected step and keep going.

use std::fmt;

use crate::state::{AvatarId, ItemId};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: a fallback exists and processing continues unchanged
/// - **Validation**: invalid input or reference, the affected step is skipped
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: the invocation cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all loadout errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait LoadoutError: fmt::Display + fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Kind of host catalog template an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateRef {
    Avatar(AvatarId),
    Item(ItemId),
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avatar(id) => write!(f, "avatar template {}", id),
            Self::Item(id) => write!(f, "item template {}", id),
        }
    }
}

/// Failures while resolving or applying a build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The build catalog document is missing or failed validation.
    #[error("build catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The selector matched no catalog entry.
    #[error("no build entry matches '{0}'")]
    CharacterNotFound(String),

    /// A character or item template is absent from the host catalog.
    #[error("{0} not found in host catalog")]
    TemplateMissing(TemplateRef),

    /// A template exists but is not of the kind the build expects.
    #[error("item template {item} is not a {expected}")]
    TemplateKindMismatch { item: ItemId, expected: &'static str },

    /// The requested build name does not exist; the first build is used.
    #[error("build '{requested}' not found for {character}, using '{fallback}'")]
    VariantNotFound {
        requested: String,
        character: String,
        fallback: String,
    },
}

impl LoadoutError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        use BuildError::*;
        match self {
            VariantNotFound { .. } | CatalogUnavailable(_) => ErrorSeverity::Recoverable,
            CharacterNotFound(_) | TemplateMissing(_) | TemplateKindMismatch { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use BuildError::*;
        match self {
            CatalogUnavailable(_) => "BUILD_CATALOG_UNAVAILABLE",
            CharacterNotFound(_) => "BUILD_CHARACTER_NOT_FOUND",
            TemplateMissing(_) => "BUILD_TEMPLATE_MISSING",
            TemplateKindMismatch { .. } => "BUILD_TEMPLATE_KIND_MISMATCH",
            VariantNotFound { .. } => "BUILD_VARIANT_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_build_error_is_fatal() {
        let errors = [
            BuildError::CatalogUnavailable("missing".into()),
            BuildError::CharacterNotFound("kafka".into()),
            BuildError::TemplateMissing(TemplateRef::Avatar(AvatarId(1))),
            BuildError::TemplateKindMismatch {
                item: ItemId(1),
                expected: "relic",
            },
            BuildError::VariantNotFound {
                requested: "ultra".into(),
                character: "March 7th".into(),
                fallback: "normal".into(),
            },
        ];
        for error in errors {
            assert!(!error.severity().is_internal(), "{}", error.error_code());
        }
    }

    #[test]
    fn template_missing_names_the_template() {
        let error = BuildError::TemplateMissing(TemplateRef::Item(ItemId(61011)));
        assert_eq!(error.to_string(), "item template 61011 not found in host catalog");
    }
}
