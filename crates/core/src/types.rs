use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

use crate::error::CoreError;

/// All generated primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Record timestamps are wall-clock date-times without a zone.
pub type LocalTimestamp = NaiveDateTime;

/// Parse an ISO-8601 date-time supplied for `field`.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`. A trailing zone offset is allowed
/// and dropped, keeping the wall-clock time as written.
pub fn parse_local_timestamp(field: &str, raw: &str) -> Result<LocalTimestamp, CoreError> {
    parse_iso_local(raw).ok_or_else(|| {
        CoreError::Validation(format!("{field} must be {EXPECTED}, got '{}'", raw.trim()))
    })
}

/// `deserialize_with` helper accepting the same forms as
/// [`parse_local_timestamp`], for timestamp fields of JSON bodies.
pub fn deserialize_local_timestamp<'de, D>(deserializer: D) -> Result<LocalTimestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_local(&raw)
        .ok_or_else(|| de::Error::custom(format!("expected {EXPECTED}, got '{raw}'")))
}

const EXPECTED: &str = "an ISO-8601 date-time (e.g. 2022-01-03T00:00:00)";

fn parse_iso_local(raw: &str) -> Option<LocalTimestamp> {
    let raw = raw.trim();

    if let Ok(ts) = raw.parse::<NaiveDateTime>() {
        return Some(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(ts);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.naive_local())
}
