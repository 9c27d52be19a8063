//! Time utilities: epoch-second conversions used by the clock and the record.

use chrono::{DateTime, Utc};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Fractional seconds since the Unix epoch.
pub fn to_epoch_seconds(t: DateTime<Utc>) -> f64 {
    t.timestamp_micros() as f64 / 1_000_000.0
}

/// Inverse of [`to_epoch_seconds`], at microsecond precision.
/// Returns `None` for values chrono cannot represent.
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64)
}

pub fn seconds_to_hours(secs: f64) -> f64 {
    secs / SECONDS_PER_HOUR
}
