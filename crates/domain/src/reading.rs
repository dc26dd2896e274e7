//! Readings — timestamped flow samples reported by the metering device.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a [`Reading`] by the store on insert.
///
/// Strictly increasing, unique, and used only for recency ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadingId(i64);

impl ReadingId {
    /// Wrap a store-assigned row identifier.
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One ingested sample from the metering device.
///
/// Immutable once stored: the readings log is append-only and is never
/// updated or deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    /// Device-supplied, expected lexicographically sortable
    /// (ISO-8601-like). Neither format nor monotonicity is enforced.
    pub timestamp: String,
    /// Instantaneous flow rate as reported; the unit is the device's.
    pub flow_rate: f64,
    /// Cumulative volume counter, assumed non-decreasing but not enforced.
    pub total_volume: f64,
    /// Actual valve position at sample time, distinct from the
    /// operator-commanded position.
    pub valve_state: bool,
}

/// A sample as submitted by the device, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReading {
    pub timestamp: String,
    pub flow_rate: f64,
    pub total_volume: f64,
    pub valve_state: bool,
}

impl NewReading {
    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn into_reading(self, id: ReadingId) -> Reading {
        Reading {
            id,
            timestamp: self.timestamp,
            flow_rate: self.flow_rate,
            total_volume: self.total_volume,
            valve_state: self.valve_state,
        }
    }
}

/// Minimum and maximum cumulative volume observed across a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeExtent {
    pub min_volume: f64,
    pub max_volume: f64,
}

impl VolumeExtent {
    /// Volume delta across the window.
    ///
    /// Max-minus-min rather than last-minus-first: an out-of-order or
    /// decreasing counter widens the delta instead of cancelling out.
    #[must_use]
    pub fn delta(self) -> f64 {
        self.max_volume - self.min_volume
    }
}
