//! Logging setup.
//!
//! The library only emits `tracing` events; hosts that want to see them can
//! install the stderr subscriber below.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, falling back to
/// the configured log level.
///
/// Returns `Ok(false)` if a global subscriber was already installed, so it
/// is safe to call more than once.
pub fn init_tracing(config: &Config) -> ConfigResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| ConfigError::Logging(e.to_string()))?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            log_level = %config.log_level,
            prefix_policy = %config.prefix_policy,
            "Tracing initialized"
        );
    }
    Ok(installed)
}
