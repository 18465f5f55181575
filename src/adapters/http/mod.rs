//! HTTP adapters - the webhook endpoint and the application around it.

mod app;
pub mod webhook;

pub use app::build_app;
pub use webhook::{webhook_router, WebhookAppState, WebhookError};
