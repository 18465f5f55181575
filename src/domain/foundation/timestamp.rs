//! Timestamp value object for the instant a platform produced a callback.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Serializes as an RFC 3339 string, which is how the intent platform stamps
/// every webhook envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ts(value: &str) -> Timestamp {
        serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap()
    }

    #[test]
    fn timestamp_parses_platform_format() {
        let ts = ts("2017-03-01T21:32:58.917Z");

        assert_eq!(ts.as_datetime().year(), 2017);
        assert_eq!(ts.as_datetime().hour(), 21);
        assert_eq!(ts.as_datetime().timestamp_subsec_millis(), 917);
    }

    #[test]
    fn timestamp_normalizes_offsets_to_utc() {
        assert_eq!(ts("2024-01-15T12:30:00+02:00").as_datetime().hour(), 10);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("1488404006").is_err());
    }

    #[test]
    fn timestamp_display_keeps_millis() {
        assert_eq!(ts("2017-03-01T21:32:58.917Z").to_string(), "2017-03-01T21:32:58.917Z");
    }

    #[test]
    fn timestamp_serializes_back_to_rfc3339() {
        let json = serde_json::to_string(&ts("2024-01-15T10:30:00Z")).unwrap();
        assert_eq!(json, "\"2024-01-15T10:30:00Z\"");
    }

    #[test]
    fn timestamp_ordering_works() {
        assert!(ts("2024-01-15T10:30:00Z") < ts("2024-01-15T10:30:01Z"));
    }
}
