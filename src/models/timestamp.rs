//! Serde adapter for timestamps that may arrive untyped.
//!
//! Records loaded from JSON carry timestamps either as RFC 3339 strings or as
//! Unix epoch milliseconds (numeric or textual). Offset-less ISO forms
//! (`2024-03-01`, `2024-03-01T10:00:00`, `2024-03-01 10:00:00`) are read as
//! UTC. Everything coerces to `OffsetDateTime`; serialization always emits
//! RFC 3339.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

/// Serialize as RFC 3339.
///
/// # Errors
///
/// Returns an error if the value cannot be formatted (year outside 0..=9999).
pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    time::serde::rfc3339::serialize(value, serializer)
}

/// Deserialize from an RFC 3339 string or epoch milliseconds.
///
/// # Errors
///
/// Returns an error if the value is neither form or is out of range.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let coerced = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => from_millis(ms),
        RawTimestamp::Text(text) => coerce(&text),
    };
    coerced.map_err(D::Error::custom)
}

/// Coerce a textual timestamp: RFC 3339 first, then offset-less ISO date or
/// date-time as UTC, then integer epoch millis.
///
/// # Errors
///
/// Returns a description of the failure if no form parses.
pub fn coerce(text: &str) -> Result<OffsetDateTime, String> {
    let text = text.trim();
    if let Ok(parsed) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(parsed);
    }
    if let Some(naive) = parse_naive(text) {
        return Ok(naive.assume_utc());
    }
    match text.parse::<i64>() {
        Ok(ms) => from_millis(ms),
        Err(_) => Err(format!("invalid timestamp: {text:?}")),
    }
}

fn parse_naive(text: &str) -> Option<PrimitiveDateTime> {
    let with_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    let with_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");
    let date_only = format_description!("[year]-[month]-[day]");

    PrimitiveDateTime::parse(text, with_t)
        .or_else(|_| PrimitiveDateTime::parse(text, with_space))
        .ok()
        .or_else(|| Date::parse(text, date_only).ok().map(Date::midnight))
}

/// Convert Unix epoch milliseconds to a UTC timestamp.
///
/// # Errors
///
/// Returns an error if the instant is outside the supported range.
pub fn from_millis(ms: i64) -> Result<OffsetDateTime, String> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .map_err(|e| format!("timestamp out of range: {e}"))
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
