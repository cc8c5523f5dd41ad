//! Common error infrastructure for game-core.
//!
//! # Design Principles
//!
//! - **Type Safety**: one error enum with specific variants per failure
//! - **Rich Context**: variants name the offending argument or field
//! - **Severity Classification**: errors are categorized for recovery strategies

use thiserror::Error;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: The current evaluation cannot continue; the caller drops it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: missing target coordinate, malformed configuration
    Validation,

    /// Fatal error - the running tick is abandoned.
    ///
    /// Examples: sensing against a target at a non-finite position
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
}

/// Errors raised by agent state operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    /// A required argument was missing or unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    /// Motion or sensing was asked to work with NaN or infinite coordinates.
    #[error("{what} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate { what: &'static str, x: f64, y: f64 },

    /// A configuration value is out of range.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl GameError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::NonFiniteCoordinate { .. } => ErrorSeverity::Fatal,
        }
    }
}
