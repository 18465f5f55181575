//! Assembly of the full HTTP application served by the binary.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::application::IntentRegistry;
use crate::config::{AppConfig, HEALTH_PATH};

use super::webhook::{health, webhook_router, WebhookAppState};

/// Build the application router.
///
/// # Routes
/// - `POST <webhook.path>` - fulfillment webhook
/// - `GET /health` - liveness probe
///
/// # Layers (outermost first)
/// - `x-request-id` assigned (UUID v4) when the caller sent none
/// - request/response tracing
/// - `x-request-id` copied onto the response
///
/// `server.request_timeout_secs` reaches handlers only as the deadline on
/// their `IntentContext`; running handlers are never cut off here.
pub fn build_app(config: &AppConfig, registry: Arc<IntentRegistry>) -> Router {
    let state = WebhookAppState::new(registry)
        .with_max_body_bytes(config.webhook.max_body_bytes)
        .with_request_timeout(config.server.request_timeout());

    Router::new()
        .route(HEALTH_PATH, get(health))
        .merge(webhook_router(&config.webhook.path).with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
