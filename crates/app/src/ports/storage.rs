//! Storage port — repository trait for the append-only readings log.

use std::future::Future;

use flowgate_domain::error::FlowGateError;
use flowgate_domain::reading::{NewReading, Reading, VolumeExtent};

/// Repository for persisting and querying [`Reading`]s.
///
/// The log is append-only: the port exposes no update or delete, and
/// implementations must not mutate stored rows.
pub trait ReadingRepository {
    /// Persist a new reading, assigning it a fresh strictly-increasing id.
    ///
    /// The row is durable before this returns; there is no partial insert.
    fn append(
        &self,
        reading: NewReading,
    ) -> impl Future<Output = Result<Reading, FlowGateError>> + Send;

    /// Get the most recently appended readings, newest first, truncated
    /// to `limit`.
    fn recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reading>, FlowGateError>> + Send;

    /// Minimum and maximum cumulative volume over readings whose
    /// timestamp falls in `[start, end)`, comparing timestamps
    /// lexicographically; an absent `end` leaves the range unbounded
    /// above.
    ///
    /// Returns `None` when no reading falls in the range.
    fn range_extent(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> impl Future<Output = Result<Option<VolumeExtent>, FlowGateError>> + Send;
}
