//! Webhook request envelope delivered by the intent platform.
//!
//! Field names follow the platform's camelCase wire format. Every field is
//! optional on the wire: a missing or `null` field decodes to its default so
//! that older or trimmed-down payloads still route.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{nullable, string_bool, Timestamp};

/// A fulfillment request: everything known about one intent invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FulfillmentRequest {
    /// Language tag of the conversation (e.g. `en`).
    #[serde(deserialize_with = "nullable::deserialize")]
    pub lang: String,
    /// Platform-side status of the query.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub status: RequestStatus,
    /// When the platform produced the callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Conversation session identifier.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub session_id: String,
    /// Recognition result, including the intent used for routing.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub result: QueryResult,
    /// Platform-assigned request identifier.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    /// Request as received by the platform from its own caller.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub original_request: OriginalRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestStatus {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub error_type: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub code: i64,
}

/// Recognition result for the user's query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResult {
    /// Extracted parameters, by name.
    #[serde(deserialize_with = "nullable::deserialize_string_map")]
    pub parameters: HashMap<String, String>,
    /// Active conversation contexts. Kept opaque.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub contexts: Vec<Value>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub resolved_query: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub source: String,
    /// Recognition confidence in `[0, 1]`.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub score: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub speech: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub fulfillment: Fulfillment,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub action_incomplete: bool,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub action: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub metadata: IntentMetadata,
}

/// Default fulfillment the platform would use without a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fulfillment {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub speech: String,
    /// Rich messages. Kept opaque.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub messages: Vec<Value>,
}

/// Metadata about the matched intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentMetadata {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub intent_id: String,
    #[serde(with = "string_bool")]
    pub webhook_for_slot_filling_used: bool,
    /// Routing key for handler dispatch.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub intent_name: String,
    #[serde(with = "string_bool")]
    pub webhook_used: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginalRequest {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub source: String,
    /// Source-specific payload. Open-ended.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub data: Map<String, Value>,
}

impl FulfillmentRequest {
    /// Decodes an envelope from a raw JSON body. A bare `null` body decodes
    /// to the empty envelope.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }

    /// Creates an otherwise empty request routed to `intent`.
    ///
    /// Mostly useful for exercising handlers in isolation.
    pub fn for_intent(intent: impl Into<String>) -> Self {
        let mut request = Self::default();
        request.result.metadata.intent_name = intent.into();
        request
    }

    /// Adds a parameter, replacing any previous value with the same name.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.result.parameters.insert(name.into(), value.into());
        self
    }

    /// Intent name used to pick a handler.
    pub fn intent_name(&self) -> &str {
        &self.result.metadata.intent_name
    }

    /// Returns the value of the named parameter, if the platform extracted it.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.result.parameters.get(name).map(String::as_str)
    }

    /// Returns all extracted parameters.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.result.parameters
    }
}
