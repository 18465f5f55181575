//! Errors that end a webhook call, and the HTTP responses they become.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::fulfillment::HandlerError;

/// Terminal failure of one webhook call.
///
/// Every variant renders as a plain-text body. Only `Decode` is the caller's
/// fault; the rest are server-side failures.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Body was unreadable or not a valid envelope.
    #[error("could not decode request: {0}")]
    Decode(String),

    /// No handler is registered for the envelope's intent.
    #[error("could not find handler for {0}")]
    UnknownIntent(String),

    /// The intent handler reported a failure.
    #[error("error processing intent: {0}")]
    Handler(#[from] HandlerError),

    /// The handler's response could not be serialized.
    #[error("could not encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl WebhookError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::Decode(_) => StatusCode::BAD_REQUEST,
            // Routing keys come from the platform's own agent definition, so a
            // miss means this deployment is missing a handler.
            WebhookError::UnknownIntent(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebhookError::Handler(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebhookError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
