//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for window cutoffs and "now" in usage queries.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as its `YYYY-MM-DD` calendar date.
///
/// Date keys sort lexicographically and prefix-match the ISO-8601-like
/// timestamp strings reported by devices, which is what all window
/// comparisons rely on.
#[must_use]
pub fn date_key(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}
