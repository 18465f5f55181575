//! Application layer - intent registry and bundled intent handlers.
//!
//! The registry is what the webhook router consults; handlers are the
//! business logic registered into it.

pub mod handlers;
mod intent_registry;

pub use intent_registry::{FnHandler, IntentRegistry};
