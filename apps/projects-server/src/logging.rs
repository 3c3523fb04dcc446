//! Logging initialization
//!
//! Installs the global tracing subscriber once at startup.

use crate::config::{LogFormat, LoggingConfig};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Build the filter from configured directives
pub fn env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{}'", level))
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level` when it is set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => env_filter(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
