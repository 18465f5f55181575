//! Serde adapters reading JSON `null` as the field's default value.
//!
//! The platform sends `null` for fields it has no value for. These decode to
//! the same value an absent field would, so such payloads still route.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Decodes `T`, treating `null` as `T::default()`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a string map, treating a `null` map as empty and a `null` entry
/// as an empty string. The entry's key is kept.
pub fn deserialize_string_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<HashMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}
