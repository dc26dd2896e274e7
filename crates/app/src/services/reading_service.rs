//! Reading service — use-case for ingesting device samples.

use flowgate_domain::error::FlowGateError;
use flowgate_domain::reading::{NewReading, Reading};

use crate::ports::ReadingRepository;

/// Application service recording inbound device samples.
pub struct ReadingService<R> {
    repo: R,
}

impl<R: ReadingRepository> ReadingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist one device sample.
    ///
    /// A structurally valid reading is never rejected; the timestamp
    /// string is stored as reported.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGateError::Storage`] when the append fails. The
    /// reading is either fully stored or not stored at all.
    pub async fn record(&self, reading: NewReading) -> Result<Reading, FlowGateError> {
        let stored = self.repo.append(reading).await?;
        tracing::debug!(id = %stored.id, "reading stored");
        Ok(stored)
    }
}
