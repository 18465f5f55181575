//! Axum router configuration for the fulfillment webhook.

use axum::{routing::post, Router};

use super::handlers::{handle_webhook, WebhookAppState};

/// Create the webhook router.
///
/// # Routes
/// - `POST <path>` - Dispatch a fulfillment request to its intent handler
///
/// Other methods on `path` are answered with 405 by axum's method router.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use fulfillment_webhook::adapters::http::webhook::{webhook_router, WebhookAppState};
///
/// let state = WebhookAppState::new(Arc::new(IntentRegistry::new()));
/// let app = webhook_router("/fulfillment").with_state(state);
/// ```
pub fn webhook_router(path: &str) -> Router<WebhookAppState> {
    Router::new().route(path, post(handle_webhook))
}
