//! Intent registry - maps intent names to the handlers that fulfil them.
//!
//! The registry is an explicitly constructed object shared through an `Arc`
//! with the webhook router, so every test can start from a fresh one.
//!
//! # Example
//!
//! ```
//! use fulfillment_webhook::application::IntentRegistry;
//! use fulfillment_webhook::domain::fulfillment::FulfillmentResponse;
//!
//! let registry = IntentRegistry::new();
//! registry.register_fn("greet", |_ctx, _request| async {
//!     Ok(FulfillmentResponse::speech("Hello!"))
//! });
//!
//! assert!(registry.lookup("greet").is_some());
//! assert!(registry.lookup("farewell").is_none());
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::fulfillment::{FulfillmentRequest, FulfillmentResponse, HandlerError};
use crate::ports::{IntentContext, IntentHandler};

/// Concurrent map from intent name to handler.
///
/// Lookups share a read lock; registration takes the write lock. A lookup
/// observes either the previous handler or the new one, never anything in
/// between. The lock is only held while touching the map, never while a
/// handler runs.
pub struct IntentRegistry {
    handlers: RwLock<HashMap<String, Arc<dyn IntentHandler>>>,
}

impl IntentRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers the handler for an intent, replacing any previous one.
    pub fn register(&self, intent: impl Into<String>, handler: Arc<dyn IntentHandler>) {
        let intent = intent.into();
        let replaced = self.write().insert(intent.clone(), handler).is_some();
        tracing::debug!(%intent, replaced, "Registered intent handler");
    }

    /// Registers an async closure as the handler for an intent.
    pub fn register_fn<F, Fut>(&self, intent: impl Into<String>, handler: F)
    where
        F: Fn(IntentContext, FulfillmentRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FulfillmentResponse, HandlerError>> + Send + 'static,
    {
        self.register(intent, Arc::new(FnHandler::new(handler)));
    }

    /// Returns the handler registered for `intent`, if any.
    pub fn lookup(&self, intent: &str) -> Option<Arc<dyn IntentHandler>> {
        self.read().get(intent).cloned()
    }

    /// Checks if an intent has a handler.
    pub fn contains(&self, intent: &str) -> bool {
        self.read().contains_key(intent)
    }

    /// Returns the registered intent names, sorted.
    pub fn intents(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered intents.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The only mutation is a single `insert`, so a poisoned map is still whole.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn IntentHandler>>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn IntentHandler>>> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapts an async closure to [`IntentHandler`].
pub struct FnHandler<F> {
    handler: F,
}

impl<F> FnHandler<F> {
    /// Wraps a closure taking `(IntentContext, FulfillmentRequest)`.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<F, Fut> IntentHandler for FnHandler<F>
where
    F: Fn(IntentContext, FulfillmentRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<FulfillmentResponse, HandlerError>> + Send + 'static,
{
    async fn handle(
        &self,
        ctx: IntentContext,
        request: FulfillmentRequest,
    ) -> Result<FulfillmentResponse, HandlerError> {
        (self.handler)(ctx, request).await
    }
}
