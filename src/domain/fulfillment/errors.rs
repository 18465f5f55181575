//! Errors an intent handler reports back to the router.

use thiserror::Error;

/// Failure raised by an intent handler.
///
/// The router turns every variant into an HTTP 500 whose body carries the
/// `Display` text, so messages should make sense to whoever reads the
/// platform's webhook logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("missing parameter '{name}'")]
    MissingParameter { name: String },

    #[error("could not parse parameter '{name}' value {value:?}: {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Failed(String),
}

impl HandlerError {
    /// Creates a missing parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        HandlerError::MissingParameter { name: name.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        HandlerError::InvalidParameter {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a free-form failure, e.g. for a downstream call that failed.
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}
