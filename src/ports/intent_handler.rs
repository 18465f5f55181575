//! IntentHandler port - Interface implemented by intent business logic.
//!
//! The router knows nothing about what a handler does; it decodes the
//! envelope, picks a handler by intent name and awaits this trait.

use async_trait::async_trait;

use super::IntentContext;
use crate::domain::fulfillment::{FulfillmentRequest, FulfillmentResponse, HandlerError};

/// Handles every webhook call routed to one intent.
///
/// Implementations may await arbitrary I/O. The call is cancelled by
/// dropping its future (client disconnect or listener timeout), so
/// long-running work should be bounded by [`IntentContext::deadline`].
///
/// # Example
///
/// ```ignore
/// struct Greeter;
///
/// #[async_trait]
/// impl IntentHandler for Greeter {
///     async fn handle(
///         &self,
///         _ctx: IntentContext,
///         request: FulfillmentRequest,
///     ) -> Result<FulfillmentResponse, HandlerError> {
///         let name = request.param("name").unwrap_or("stranger");
///         Ok(FulfillmentResponse::speech(format!("Hello, {}!", name)))
///     }
/// }
/// ```
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Produce the response for one invocation.
    async fn handle(
        &self,
        ctx: IntentContext,
        request: FulfillmentRequest,
    ) -> Result<FulfillmentResponse, HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn shared_handlers_are_send_sync() {
        assert_send_sync::<dyn IntentHandler>();
        assert_send_sync::<std::sync::Arc<dyn IntentHandler>>();
        assert_send_sync::<Echo>();
    }

    struct Echo;

    #[async_trait]
    impl IntentHandler for Echo {
        async fn handle(
            &self,
            _ctx: IntentContext,
            request: FulfillmentRequest,
        ) -> Result<FulfillmentResponse, HandlerError> {
            Ok(FulfillmentResponse::speech(request.result.resolved_query))
        }
    }

    #[tokio::test]
    async fn handler_can_be_called_through_trait_object() {
        let handler: Box<dyn IntentHandler> = Box::new(Echo);
        let mut request = FulfillmentRequest::for_intent("echo");
        request.result.resolved_query = "say this".to_string();

        let response = handler
            .handle(IntentContext::detached(), request)
            .await
            .unwrap();

        assert_eq!(response.speech, "say this");
    }
}
