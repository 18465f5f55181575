//! Response value a handler returns for one intent invocation.

use serde::{Deserialize, Serialize};

/// What the platform should say and show back to the user.
///
/// Both fields are passed through verbatim; an empty `display_text` lets the
/// platform fall back to the spoken text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FulfillmentResponse {
    pub speech: String,
    pub display_text: String,
}

impl FulfillmentResponse {
    /// Creates a response with spoken text only.
    pub fn speech(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            display_text: String::new(),
        }
    }

    /// Sets the text shown on screens.
    pub fn with_display_text(mut self, display_text: impl Into<String>) -> Self {
        self.display_text = display_text.into();
        self
    }

    /// Encodes the response the way the webhook writes it: two-space
    /// indented JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
