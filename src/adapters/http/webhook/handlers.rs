//! HTTP handlers for the fulfillment webhook.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use tokio::time::Instant;
use uuid::Uuid;

use crate::application::IntentRegistry;
use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::domain::fulfillment::FulfillmentRequest;
use crate::ports::IntentContext;

use super::WebhookError;

/// Header carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state for the webhook endpoint.
#[derive(Clone)]
pub struct WebhookAppState {
    /// Intent handlers, shared with whoever registers them
    pub registry: Arc<IntentRegistry>,
    /// Largest body read from a webhook call
    pub max_body_bytes: usize,
    /// Budget handed to handlers as a deadline; not enforced here
    pub request_timeout: Option<Duration>,
}

impl WebhookAppState {
    pub fn new(registry: Arc<IntentRegistry>) -> Self {
        Self {
            registry,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: None,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }
}

/// Decode, route, invoke, respond.
///
/// POST <webhook path>
pub async fn handle_webhook(
    State(state): State<WebhookAppState>,
    request: Request,
) -> Result<Response, WebhookError> {
    let (parts, body) = request.into_parts();

    // 1. Decode
    let body = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| WebhookError::Decode(e.to_string()))?;
    let envelope =
        FulfillmentRequest::from_json(&body).map_err(|e| WebhookError::Decode(e.to_string()))?;

    // 2. Route
    let intent = envelope.intent_name().to_string();
    let handler = match state.registry.lookup(&intent) {
        Some(handler) => handler,
        None => {
            tracing::warn!(%intent, "No handler registered for intent");
            return Err(WebhookError::UnknownIntent(intent));
        }
    };

    // 3. Invoke
    let request_id = parts
        .headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    tracing::debug!(%intent, %request_id, "Dispatching intent");

    let mut ctx = IntentContext::from_http(parts, request_id);
    if let Some(timeout) = state.request_timeout {
        ctx = ctx.with_deadline(Instant::now() + timeout);
    }

    let response = handler.handle(ctx, envelope).await.map_err(|e| {
        tracing::error!(%intent, error = %e, "Intent handler failed");
        WebhookError::Handler(e)
    })?;

    // 4. Respond
    let body = response.to_pretty_json()?;
    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
