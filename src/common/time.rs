use chrono::{DateTime, Utc};
use crate::common::types::Timestamp;

pub const MILLIS_PER_SECOND: i64 = 1000;

/// Converts fractional epoch seconds to epoch millis, rounding to the nearest milli.
/// Returns `None` when the result does not fit in a `Timestamp`.
pub fn secs_to_millis(secs: f64) -> Option<Timestamp> {
    let millis = (secs * MILLIS_PER_SECOND as f64).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if millis.is_finite() && millis >= Timestamp::MIN as f64 && millis < Timestamp::MAX as f64 {
        Some(millis as Timestamp)
    } else {
        None
    }
}

/// Whole seconds between two millis timestamps, truncated toward zero.
pub fn millis_delta_to_secs(from: Timestamp, to: Timestamp) -> Option<i64> {
    to.checked_sub(from).map(|delta| delta / MILLIS_PER_SECOND)
}

pub fn millis_to_datetime(ts: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ts)
}
