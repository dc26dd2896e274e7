//! Usage service — windowed volume aggregation over the readings log.

use chrono::Duration;

use flowgate_domain::error::FlowGateError;
use flowgate_domain::reading::{Reading, VolumeExtent};
use flowgate_domain::time::{Timestamp, date_key};
use flowgate_domain::usage::UsageSummary;

use crate::ports::ReadingRepository;

/// Maximum number of readings returned by [`UsageService::history`].
const HISTORY_LIMIT: usize = 100;

/// Rolling window lengths, in days.
const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

/// Application service computing usage metrics over time windows.
pub struct UsageService<R> {
    repo: R,
}

impl<R: ReadingRepository> UsageService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Usage for the current calendar day plus the rolling 7- and 30-day
    /// windows, each a max-minus-min delta of the cumulative volume.
    ///
    /// `today` covers readings whose timestamp prefix-matches the
    /// calendar date of `now`, expressed as the half-open range
    /// `[date, next date)` — equivalent for sortable timestamp strings.
    /// The rolling cutoffs are date-only strings, so a cutoff admits
    /// every reading from that calendar day onward. Windows with fewer
    /// than two readings contribute `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGateError::Storage`] when a window query fails.
    pub async fn usage_summary(&self, now: Timestamp) -> Result<UsageSummary, FlowGateError> {
        let today = date_key(now);
        let tomorrow = date_key(now + Duration::days(1));
        let week_cutoff = date_key(now - Duration::days(WEEK_DAYS));
        let month_cutoff = date_key(now - Duration::days(MONTH_DAYS));

        let today_extent = self.repo.range_extent(&today, Some(&tomorrow)).await?;
        let week_extent = self.repo.range_extent(&week_cutoff, None).await?;
        let month_extent = self.repo.range_extent(&month_cutoff, None).await?;

        Ok(UsageSummary {
            today: today_extent.map_or(0.0, VolumeExtent::delta),
            last_week: week_extent.map_or(0.0, VolumeExtent::delta),
            last_month: month_extent.map_or(0.0, VolumeExtent::delta),
        })
    }

    /// The most recent readings, newest first, capped at 100 entries.
    ///
    /// # Errors
    ///
    /// Returns [`FlowGateError::Storage`] when the query fails.
    pub async fn history(&self) -> Result<Vec<Reading>, FlowGateError> {
        self.repo.recent(HISTORY_LIMIT).await
    }
}
