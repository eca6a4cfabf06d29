//! Error types for the EventEase host.

use thiserror::Error;

/// Configuration could not be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value as found
        value: String,
        /// Parser message
        reason: String,
    },

    /// The session timeout must be at least one second.
    #[error("Session timeout must be positive, got {0} seconds")]
    NonPositiveTimeout(i64),

    /// The session timeout does not fit in a duration.
    #[error("Session timeout of {0} seconds is out of range")]
    TimeoutOutOfRange(i64),
}
