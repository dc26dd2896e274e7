//! Aggregate usage over trailing time windows.

use serde::{Deserialize, Serialize};

/// Volume deltas over the three reporting windows.
///
/// Each field is a non-negative max-minus-min of the cumulative volume
/// counter across the readings falling in that window; a window with
/// fewer than two readings contributes `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Current calendar date (timestamp prefix match), not a rolling 24 h.
    pub today: f64,
    /// Rolling 7-day window.
    pub last_week: f64,
    /// Rolling 30-day window.
    pub last_month: f64,
}
