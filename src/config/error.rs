//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Log level must not be empty")]
    EmptyLogLevel,

    #[error("Webhook path must start with '/': {0}")]
    InvalidWebhookPath(String),

    #[error("Webhook path collides with the health endpoint")]
    WebhookPathReserved,

    #[error("Webhook body limit must be between 1 byte and 16 MiB")]
    InvalidBodyLimit,
}
