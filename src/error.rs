//! Error types for the crate outside the ISBN domain itself.
//!
//! Domain errors live in [`crate::domain::IsbnError`]; this module covers
//! loading the runtime configuration.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to install the tracing subscriber
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
