//! Tracing subscriber setup.
//!
//! Call [`init`] once at startup, after configuration is loaded.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("failed to set global subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter from the configured directives, falling back to
/// `RUST_LOG` when they do not parse.
pub fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_new(directives) {
        Ok(filter) => Ok(filter),
        Err(config_err) => {
            EnvFilter::try_from_default_env().map_err(|_| TelemetryError::InvalidFilter {
                filter: directives.to_string(),
                reason: config_err.to_string(),
            })
        }
    }
}

/// Install the global tracing subscriber for the server.
pub fn init(config: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match config.log_format() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
