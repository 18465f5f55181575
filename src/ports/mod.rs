//! Ports - Interfaces between the webhook router and intent business logic.
//!
//! - `IntentHandler` - implemented once per intent, invoked by the router
//! - `IntentContext` - per-call data passed to the handler alongside the envelope

mod intent_context;
mod intent_handler;

pub use intent_context::IntentContext;
pub use intent_handler::IntentHandler;
