//! Domain layer containing the fulfillment wire types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, string-encoded booleans)
//! - `fulfillment` - Webhook request envelope, response value and handler errors

pub mod foundation;
pub mod fulfillment;
