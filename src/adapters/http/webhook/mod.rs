//! HTTP adapter for the fulfillment webhook.
//!
//! Exposes the intent registry to the conversational platform:
//! - `POST <path>` - Decode the envelope, route by intent name, invoke the
//!   handler and write its response as indented JSON
//!
//! Failures are plain text: 400 for undecodable bodies, 500 for unknown
//! intents, handler failures and encoding failures.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::WebhookError;
pub use handlers::{health, WebhookAppState, REQUEST_ID_HEADER};
pub use routes::webhook_router;
