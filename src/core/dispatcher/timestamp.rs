//! Signing timestamps

use chrono::{DateTime, TimeDelta, Utc};

/// ISO-8601 UTC with millisecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format `now` for signing
///
/// A millisecond component that is a multiple of 10 is nudged forward by
/// 1 ms; the service's timestamp parser drops trailing zeros and the
/// signature would no longer match.
pub fn signing_timestamp(now: DateTime<Utc>) -> String {
    let at = if now.timestamp_subsec_millis() % 10 == 0 {
        now + TimeDelta::milliseconds(1)
    } else {
        now
    };
    at.format(TIMESTAMP_FORMAT).to_string()
}
