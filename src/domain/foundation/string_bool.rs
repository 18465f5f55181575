//! Serde adapter for booleans the platform transmits as JSON strings.
//!
//! The webhook metadata carries flags such as `"webhookUsed": "true"`. This
//! module decodes the quoted literals `"true"` and `"false"`, tolerates native
//! JSON booleans and `null` (read as `false`), and always encodes back to the
//! quoted form so re-serialized envelopes stay wire-compatible.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Flags {
//!     #[serde(with = "fulfillment_webhook::domain::foundation::string_bool")]
//!     used: bool,
//! }
//!
//! let flags: Flags = serde_json::from_str(r#"{"used": "true"}"#).unwrap();
//! assert!(flags.used);
//! ```

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "true" } else { "false" })
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringBoolVisitor)
}

struct StringBoolVisitor;

impl<'de> Visitor<'de> for StringBoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean encoded as the string \"true\" or \"false\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        match value {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(E::invalid_value(Unexpected::Str(other), &self)),
        }
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_unit<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_none<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }
}
