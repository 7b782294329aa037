//! Date codec for the `dd/mm/yyyy` wire format.
//!
//! Products serialize their expiration date as literal `dd/mm/yyyy` text,
//! while input is parsed permissively from any of the accepted formats below.
//! Encoding a canonically formatted string after parsing reproduces the
//! original text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, StockError};

/// Output format for all dates crossing the HTTP boundary.
pub const WIRE_FORMAT: &str = "%d/%m/%Y";

/// Datetime formats accepted on input, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Date-only formats accepted on input; midnight is assumed.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];

/// Format a datetime as `dd/mm/yyyy`, discarding the time-of-day component.
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

/// Parse a datetime from any accepted textual representation.
///
/// Tries full datetime formats first, then date-only formats (midnight
/// assumed), then RFC 3339. Returns `InvalidArgument` if nothing matches.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.and_hms_opt(0, 0, 0).unwrap_or_default());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    Err(StockError::InvalidArgument(format!(
        "Unrecognized date format: '{s}'"
    )))
}

/// Serde adapter applying the wire codec to a `NaiveDateTime` field.
///
/// Use with `#[serde(with = "crate::dates::wire")]`.
pub mod wire {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_datetime(&s).map_err(serde::de::Error::custom)
    }
}

/// Deserialize half of the wire codec for optional datetime fields.
///
/// Use with `#[serde(default, with = "crate::dates::wire_opt")]` on
/// deserialize-only types such as filter inputs. A missing, null, or empty
/// field yields `None`.
pub mod wire_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) if !s.is_empty() => super::parse_datetime(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
