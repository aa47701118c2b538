//! Configuration management.
//!
//! Values are read from environment variables, with an optional `.env` file
//! loaded first through `dotenvy`.

use crate::domain::PrefixPolicy;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Runtime configuration for hosts embedding the ISBN value types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix handling for ISBN-13 to ISBN-10 conversion (default: permissive)
    pub prefix_policy: PrefixPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ISBN_PREFIX_POLICY`: `permissive` or `strict` (default: permissive)
    /// - `LOG_LEVEL`: trace, debug, info, warn or error (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let prefix_policy = match env::var("ISBN_PREFIX_POLICY") {
            Ok(val) => val
                .parse::<PrefixPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ISBN_PREFIX_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => PrefixPolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL")
            .map(|val| val.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of {}, got: {}",
                    LOG_LEVELS.join(", "),
                    log_level
                ),
            });
        }

        Ok(Config {
            prefix_policy,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix_policy: PrefixPolicy::Permissive,
            log_level: "error".to_string(),
        }
    }
}
