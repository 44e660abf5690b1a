// File: crates/wind-core/src/sample.rs
// Summary: WindSample record and per-field parse diagnostics.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout of the timestamp column, e.g. `2024-01-01 13:05:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse layout: [`TIMESTAMP_FORMAT`] with an optional fractional-seconds suffix.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Unix seconds of `0001-01-01 00:00:00 UTC`, used when a timestamp fails to parse.
pub const ZERO_TIME_UNIX: i64 = -62_135_596_800;

/// One observation. Immutable once loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindSample {
    pub timestamp: DateTime<Utc>,
    pub direction: f64,
    pub velocity: f64,
}

impl WindSample {
    pub fn new(timestamp: DateTime<Utc>, direction: f64, velocity: f64) -> Self {
        Self { timestamp, direction, velocity }
    }

    /// Timestamp as whole Unix epoch seconds; sub-second precision is dropped.
    #[inline]
    pub fn unix_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

/// Zero value substituted for an unparsable timestamp.
pub fn zero_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_UNIX, 0).unwrap_or_default()
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`], interpreted as UTC.
/// Fractional seconds after the seconds field are accepted (`00:00:00.5`).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_PARSE_FORMAT)
        .map(|t| t.and_utc())
        .map_err(|e| e.to_string())
}

/// Parse a 64-bit float without trimming.
pub fn parse_value(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>().map_err(|e| e.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    Direction,
    Velocity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Timestamp => "timestamp",
            Field::Direction => "direction",
            Field::Velocity => "velocity",
        };
        f.write_str(name)
    }
}

/// A field that failed to parse. `line` is 1-based and counts the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub line: u64,
    pub field: Field,
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: invalid {} {:?}: {}", self.line, self.field, self.raw, self.reason)
    }
}
