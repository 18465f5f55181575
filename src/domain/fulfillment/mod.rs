//! Fulfillment wire types.
//!
//! - [`FulfillmentRequest`] - envelope decoded from the platform's webhook call
//! - [`FulfillmentResponse`] - speech/display text sent back
//! - [`HandlerError`] - failure reported by an intent handler

mod errors;
mod request;
mod response;

pub use errors::HandlerError;
pub use request::{
    Fulfillment, FulfillmentRequest, IntentMetadata, OriginalRequest, QueryResult, RequestStatus,
};
pub use response::FulfillmentResponse;
