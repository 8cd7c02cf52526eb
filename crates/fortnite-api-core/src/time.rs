//! Timestamp normalization.
//!
//! The service mostly sends RFC 3339 timestamps, but a few fields carry the
//! offset-less placeholder `0001-01-01T00:00:00`. Both forms are read as UTC,
//! so every timestamp in a model is a `DateTime<Utc>`.
//!
//! The submodules are meant for `#[serde(with = "...")]`.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Parse a service timestamp into a UTC instant.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if `raw` is neither RFC 3339 nor a
/// naive ISO 8601 date-time.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::MalformedResponse(format!("invalid timestamp {raw:?}: {e}")))
}

/// Render a UTC instant the way the service sends it.
#[must_use]
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Required timestamp.
pub mod utc {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339.
    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(time))
    }

    /// Deserialize from any accepted timestamp form.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }
}

/// Optional timestamp; null and absent both become `None`.
pub mod utc_opt {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339 or null.
    pub fn serialize<S: Serializer>(
        time: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_str(&super::format_time(time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from an optional timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| super::parse_time(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

/// List of timestamps; null becomes an empty list.
pub mod utc_vec {
    use chrono::{DateTime, Utc};
    use serde::ser::SerializeSeq;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as a list of RFC 3339 strings.
    pub fn serialize<S: Serializer>(times: &[DateTime<Utc>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(times.len()))?;
        for time in times {
            seq.serialize_element(&super::format_time(time))?;
        }
        seq.end()
    }

    /// Deserialize from a list of timestamps.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<DateTime<Utc>>, D::Error> {
        let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
        raw.unwrap_or_default()
            .iter()
            .map(|raw| super::parse_time(raw).map_err(de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use serde::{Deserialize, Serialize};

    #[test]
    fn parses_zulu_timestamp_as_utc() {
        let time = parse_time("2021-09-01T00:00:00Z").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let time = parse_time("2021-09-01T02:00:00+02:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn naive_placeholder_is_read_as_utc() {
        let time = parse_time("0001-01-01T00:00:00").unwrap();
        assert_eq!(time.year(), 1);
        assert_eq!(format_time(&time), "0001-01-01T00:00:00Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_time("yesterday"),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "utc")]
        added: DateTime<Utc>,
        #[serde(default, with = "utc_opt")]
        expires: Option<DateTime<Utc>>,
        #[serde(default, with = "utc_vec")]
        history: Vec<DateTime<Utc>>,
    }

    #[test]
    fn serde_helpers_tolerate_missing_and_null() {
        let stamped: Stamped = serde_json::from_value(serde_json::json!({
            "added": "2019-10-15T00:00:00.123Z",
            "expires": null,
            "history": null
        }))
        .unwrap();

        assert_eq!(stamped.expires, None);
        assert!(stamped.history.is_empty());

        let again: Stamped =
            serde_json::from_value(serde_json::to_value(&stamped).unwrap()).unwrap();
        assert_eq!(again, stamped);
    }
}
