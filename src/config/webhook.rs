//! Webhook endpoint configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Path served by the liveness probe; the webhook may not shadow it.
pub const HEALTH_PATH: &str = "/health";

/// Body limit used when none is configured.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

const MAX_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Webhook endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Path the platform POSTs fulfillment requests to
    #[serde(default = "default_path")]
    pub path: String,

    /// Largest request body accepted, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl WebhookConfig {
    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.path.starts_with('/') {
            return Err(ValidationError::InvalidWebhookPath(self.path.clone()));
        }
        if self.path == HEALTH_PATH {
            return Err(ValidationError::WebhookPathReserved);
        }
        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_BODY_LIMIT {
            return Err(ValidationError::InvalidBodyLimit);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_path() -> String {
    "/".to_string()
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}
