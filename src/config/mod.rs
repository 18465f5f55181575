//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FULFILLMENT_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fulfillment_webhook::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Webhook served at {}", config.webhook.path);
//! ```

mod error;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use webhook::{WebhookConfig, DEFAULT_MAX_BODY_BYTES, HEALTH_PATH};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a server on
/// `0.0.0.0:8080` taking webhook calls at `/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Webhook endpoint configuration (path, body limit)
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FULFILLMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FULFILLMENT__SERVER__PORT=9000` -> `server.port = 9000`
    /// - `FULFILLMENT__WEBHOOK__PATH=/fulfillment` -> `webhook.path = "/fulfillment"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FULFILLMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.webhook.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FULFILLMENT__SERVER__PORT",
        "FULFILLMENT__SERVER__ENVIRONMENT",
        "FULFILLMENT__SERVER__LOG_FORMAT",
        "FULFILLMENT__WEBHOOK__PATH",
        "FULFILLMENT__WEBHOOK__MAX_BODY_BYTES",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.webhook.path, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FULFILLMENT__SERVER__PORT", "3000");
        env::set_var("FULFILLMENT__SERVER__LOG_FORMAT", "json");
        env::set_var("FULFILLMENT__WEBHOOK__PATH", "/fulfillment");
        env::set_var("FULFILLMENT__WEBHOOK__MAX_BODY_BYTES", "2048");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format(), LogFormat::Json);
        assert_eq!(config.webhook.path, "/fulfillment");
        assert_eq!(config.webhook.max_body_bytes, 2048);
    }

    #[test]
    fn test_production_environment_selects_json_logs() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FULFILLMENT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.server.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_bind_address_error_surfaces_as_config_error() {
        let config = AppConfig {
            server: ServerConfig {
                host: "not a host".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = config
            .server
            .socket_addr()
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationFailed(ValidationError::InvalidBindAddress(ref addr))
                if addr == "not a host:8080"
        ));
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let config = AppConfig {
            webhook: WebhookConfig {
                path: "no-slash".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWebhookPath(_))
        ));
    }
}
