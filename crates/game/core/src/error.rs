//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (e.g. [`CatalogError`](crate::CatalogError),
//! [`ConfigError`](crate::ConfigError)) are defined next to the data they
//! validate. This module only provides the classification shared by all of
//! them so that callers can pick a recovery strategy (re-prompt vs. abort).
//!
//! Game rules that merely prevent an action (not enough stamina, skill already
//! spent) are never errors: they are reported as [`ActionOutcome`](crate::ActionOutcome)
//! variants with narration.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input from the caller, such as an unknown catalog
///   name. The caller should re-prompt.
/// - **Fatal**: Content or configuration is broken and the process cannot
///   start a match with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Fatal error - content or configuration is unusable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can recover by supplying different input.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
