//! DoubleHandler - reads a number from the request and doubles it.
//!
//! The demo intent served by the bundled binary; also a template for
//! writing real intent handlers.

use async_trait::async_trait;

use crate::domain::fulfillment::{FulfillmentRequest, FulfillmentResponse, HandlerError};
use crate::ports::{IntentContext, IntentHandler};

/// Intent name the handler is registered under by default.
pub const DOUBLE_INTENT: &str = "double";

/// Parameter carrying the number to double.
pub const NUM_PARAM: &str = "num";

/// Answers `"<n> times two equals <2n>"` for the `num` parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHandler;

impl DoubleHandler {
    pub fn new() -> Self {
        Self
    }

    fn double(raw: &str) -> Result<FulfillmentResponse, HandlerError> {
        let num: i64 = raw
            .trim()
            .parse()
            .map_err(|e| HandlerError::invalid_parameter(NUM_PARAM, raw, e))?;

        let doubled = num
            .checked_mul(2)
            .ok_or_else(|| HandlerError::invalid_parameter(NUM_PARAM, raw, "too large to double"))?;

        Ok(FulfillmentResponse::speech(format!(
            "{} times two equals {}",
            num, doubled
        )))
    }
}

#[async_trait]
impl IntentHandler for DoubleHandler {
    async fn handle(
        &self,
        ctx: IntentContext,
        request: FulfillmentRequest,
    ) -> Result<FulfillmentResponse, HandlerError> {
        let raw = request
            .param(NUM_PARAM)
            .ok_or_else(|| HandlerError::missing_parameter(NUM_PARAM))?;

        tracing::debug!(request_id = ctx.request_id(), num = raw, "Doubling number");
        Self::double(raw)
    }
}
