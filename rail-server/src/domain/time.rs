//! Wire timestamp handling.
//!
//! Timestamps cross the boundary as ISO-8601-style strings. Clients are
//! not consistent about offsets, so parsing accepts both RFC 3339 (with
//! an offset or `Z`) and offset-free strings, which are read as UTC.
//! Internally all arithmetic happens on `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid instant: {reason}")]
pub struct InstantParseError {
    reason: &'static str,
}

/// Parse an ISO-8601-style timestamp into a UTC instant.
///
/// # Examples
///
/// ```
/// use rail_server::domain::parse_instant;
///
/// // With offset
/// assert!(parse_instant("2025-06-01T08:00:00+02:00").is_ok());
/// assert!(parse_instant("2025-06-01T08:00:00Z").is_ok());
///
/// // Offset-free, read as UTC
/// assert!(parse_instant("2025-06-01T08:00:00").is_ok());
/// assert!(parse_instant("2025-06-01T08:00").is_ok());
///
/// assert!(parse_instant("not a time").is_err());
/// ```
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, InstantParseError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant.with_timezone(&Utc));
    }

    // Offset-free variants, with and without seconds
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(InstantParseError {
        reason: "expected an ISO-8601 timestamp",
    })
}

/// Serde adapter for `DateTime<Utc>` fields using the lenient wire format.
pub mod instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_instant(&s).map_err(D::Error::custom)
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Fields using this adapter also need `#[serde(default)]` so a missing
/// key deserializes as `None`.
pub mod instant_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_some(&instant.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse_instant(&s).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset() {
        let instant = parse_instant("2025-06-01T08:00:00+02:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_zulu() {
        let instant = parse_instant("2025-06-01T08:00:00Z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn offset_free_is_read_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        assert_eq!(parse_instant("2025-06-01T08:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2025-06-01 08:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2025-06-01T08:00").unwrap(), expected);
    }

    #[test]
    fn parses_fractional_seconds() {
        let instant = parse_instant("2025-06-01T08:00:00.250").unwrap();
        assert_eq!(
            instant.timestamp_millis(),
            Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
                .unwrap()
                .timestamp_millis()
                + 250
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("").is_err());
        assert!(parse_instant("not a time").is_err());
        assert!(parse_instant("2025-13-01T00:00:00").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    proptest! {
        /// Any UTC instant survives a serialize/parse roundtrip.
        #[test]
        fn rfc3339_roundtrip(secs in 0i64..4_102_444_800) {
            let instant = Utc.timestamp_opt(secs, 0).unwrap();
            let parsed = parse_instant(&instant.to_rfc3339()).unwrap();
            prop_assert_eq!(parsed, instant);
        }
    }
}
