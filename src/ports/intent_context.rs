//! Per-call context handed to intent handlers.

use std::time::Duration;

use http::request::Parts;
use tokio::time::Instant;
use uuid::Uuid;

/// Everything about the inbound HTTP call that is not part of the envelope.
///
/// The router builds one per webhook call and moves it into the handler.
/// Handler unit tests use [`IntentContext::detached`], which carries no HTTP
/// request.
#[derive(Debug)]
pub struct IntentContext {
    request_id: String,
    http_request: Option<Parts>,
    deadline: Option<Instant>,
}

impl IntentContext {
    /// Creates a context that did not originate from an HTTP call.
    pub fn detached() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            http_request: None,
            deadline: None,
        }
    }

    /// Creates a context for a call received over HTTP.
    pub fn from_http(http_request: Parts, request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            http_request: Some(http_request),
            deadline: None,
        }
    }

    /// Sets the instant after which the caller stops waiting.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Correlation id of this call (the `x-request-id` header when present).
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Head of the originating HTTP request: method, URI, headers and
    /// extensions. `None` when the context was not built by the router.
    pub fn http_request(&self) -> Option<&Parts> {
        self.http_request.as_ref()
    }

    /// Convenience lookup of a header on the originating request.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.http_request
            .as_ref()?
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(uri: &str) -> Parts {
        let (parts, _) = http::Request::builder()
            .method("POST")
            .uri(uri)
            .header("x-platform-signature", "abc123")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn detached_context_has_no_http_request() {
        let ctx = IntentContext::detached();

        assert!(ctx.http_request().is_none());
        assert!(ctx.header("x-platform-signature").is_none());
        assert!(ctx.deadline().is_none());
        assert!(!ctx.request_id().is_empty());
    }

    #[test]
    fn detached_contexts_get_distinct_request_ids() {
        assert_ne!(
            IntentContext::detached().request_id(),
            IntentContext::detached().request_id()
        );
    }

    #[test]
    fn http_context_exposes_originating_request() {
        let ctx = IntentContext::from_http(parts("/webhook?agent=demo"), "req-1");

        let request = ctx.http_request().unwrap();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.uri.query(), Some("agent=demo"));
        assert_eq!(ctx.header("x-platform-signature"), Some("abc123"));
        assert_eq!(ctx.request_id(), "req-1");
    }

    #[tokio::test]
    async fn remaining_counts_down_to_zero() {
        let ctx = IntentContext::detached().with_deadline(Instant::now() + Duration::from_secs(30));
        let remaining = ctx.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(30));
        assert!(remaining > Duration::from_secs(25));

        let expired = IntentContext::detached().with_deadline(Instant::now());
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(expired.remaining(), Some(Duration::ZERO));
    }
}
