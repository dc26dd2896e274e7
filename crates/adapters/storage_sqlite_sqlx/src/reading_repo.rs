//! `SQLite` implementation of [`ReadingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use flowgate_app::ports::storage::ReadingRepository;
use flowgate_domain::error::FlowGateError;
use flowgate_domain::reading::{NewReading, Reading, ReadingId, VolumeExtent};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without
/// polluting domain structs with database concerns.
struct Wrapper(Reading);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let timestamp: String = row.try_get("timestamp")?;
        let flow_rate: f64 = row.try_get("flow_rate")?;
        let total_volume: f64 = row.try_get("total_volume")?;
        let valve_state: bool = row.try_get("valve_state")?;

        Ok(Self(Reading {
            id: ReadingId::from_i64(id),
            timestamp,
            flow_rate,
            total_volume,
            valve_state,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO readings (timestamp, flow_rate, total_volume, valve_state)
    VALUES (?, ?, ?, ?)
";

const SELECT_RECENT: &str = r"
    SELECT * FROM readings
    ORDER BY id DESC
    LIMIT ?
";

const SELECT_EXTENT_FROM: &str = r"
    SELECT MIN(total_volume) AS min_volume, MAX(total_volume) AS max_volume
    FROM readings
    WHERE timestamp >= ?
";

const SELECT_EXTENT_IN_RANGE: &str = r"
    SELECT MIN(total_volume) AS min_volume, MAX(total_volume) AS max_volume
    FROM readings
    WHERE timestamp >= ? AND timestamp < ?
";

/// `SQLite`-backed readings repository.
///
/// The `readings` table is append-only; this repository issues no
/// UPDATE or DELETE statements.
pub struct SqliteReadingRepository {
    pool: SqlitePool,
}

impl SqliteReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for SqliteReadingRepository {
    async fn append(&self, reading: NewReading) -> Result<Reading, FlowGateError> {
        let result = sqlx::query(INSERT)
            .bind(&reading.timestamp)
            .bind(reading.flow_rate)
            .bind(reading.total_volume)
            .bind(reading.valve_state)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(reading.into_reading(ReadingId::from_i64(result.last_insert_rowid())))
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Reading>, FlowGateError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn range_extent(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<Option<VolumeExtent>, FlowGateError> {
        let row: (Option<f64>, Option<f64>) = if let Some(end) = end {
            sqlx::query_as(SELECT_EXTENT_IN_RANGE)
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await
        } else {
            sqlx::query_as(SELECT_EXTENT_FROM)
                .bind(start)
                .fetch_one(&self.pool)
                .await
        }
        .map_err(StorageError::from)?;

        // MIN/MAX over an empty range come back NULL.
        Ok(match row {
            (Some(min_volume), Some(max_volume)) => Some(VolumeExtent {
                min_volume,
                max_volume,
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteReadingRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();

        SqliteReadingRepository::new(db.pool().clone())
    }

    fn sample(timestamp: &str, total_volume: f64) -> NewReading {
        NewReading {
            timestamp: timestamp.to_string(),
            flow_rate: 2.5,
            total_volume,
            valve_state: true,
        }
    }

    #[tokio::test]
    async fn should_assign_strictly_increasing_ids_on_append() {
        let repo = setup().await;

        let first = repo.append(sample("2024-01-01T00:00:00", 1.0)).await.unwrap();
        let second = repo.append(sample("2024-01-01T00:01:00", 2.0)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_return_appended_reading_as_newest() {
        let repo = setup().await;

        let stored = repo.append(sample("2024-01-01T00:00:00", 1.0)).await.unwrap();
        let recent = repo.recent(1).await.unwrap();

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0], stored);
    }

    #[tokio::test]
    async fn should_return_recent_newest_first_and_respect_limit() {
        let repo = setup().await;
        for i in 0..5 {
            repo.append(sample(&format!("2024-01-01T00:00:0{i}"), f64::from(i)))
                .await
                .unwrap();
        }

        let recent = repo.recent(3).await.unwrap();

        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].total_volume, 4.0);
        assert_eq!(recent[1].total_volume, 3.0);
        assert_eq!(recent[2].total_volume, 2.0);
    }

    #[tokio::test]
    async fn should_return_empty_recent_when_store_is_empty() {
        let repo = setup().await;

        let recent = repo.recent(100).await.unwrap();

        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn should_preserve_fields_through_storage_roundtrip() {
        let repo = setup().await;

        let stored = repo
            .append(NewReading {
                timestamp: "2024-06-01T09:30:00".to_string(),
                flow_rate: 0.25,
                total_volume: 1234.5,
                valve_state: false,
            })
            .await
            .unwrap();
        let fetched = &repo.recent(1).await.unwrap()[0];

        assert_eq!(fetched, &stored);
        assert_eq!(fetched.timestamp, "2024-06-01T09:30:00");
        assert_eq!(fetched.flow_rate, 0.25);
        assert_eq!(fetched.total_volume, 1234.5);
        assert!(!fetched.valve_state);
    }

    #[tokio::test]
    async fn should_return_none_extent_when_range_is_empty() {
        let repo = setup().await;
        repo.append(sample("2024-01-01T00:00:00", 5.0)).await.unwrap();

        let extent = repo.range_extent("2024-02-01", None).await.unwrap();

        assert!(extent.is_none());
    }

    #[tokio::test]
    async fn should_compute_extent_over_unbounded_range() {
        let repo = setup().await;
        repo.append(sample("2024-01-01T00:00:00", 10.0)).await.unwrap();
        repo.append(sample("2024-01-02T00:00:00", 15.0)).await.unwrap();
        repo.append(sample("2024-01-03T00:00:00", 12.0)).await.unwrap();

        let extent = repo.range_extent("2024-01-01", None).await.unwrap().unwrap();

        assert_eq!(extent.min_volume, 10.0);
        assert_eq!(extent.max_volume, 15.0);
        assert_eq!(extent.delta(), 5.0);
    }

    #[tokio::test]
    async fn should_exclude_upper_bound_from_range() {
        let repo = setup().await;
        repo.append(sample("2024-01-01T00:00:00", 1.0)).await.unwrap();
        repo.append(sample("2024-01-02T00:00:00", 9.0)).await.unwrap();

        let extent = repo
            .range_extent("2024-01-01", Some("2024-01-02"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(extent.min_volume, 1.0);
        assert_eq!(extent.max_volume, 1.0);
    }

    #[tokio::test]
    async fn should_include_lower_bound_in_range() {
        let repo = setup().await;
        repo.append(sample("2024-01-01", 3.0)).await.unwrap();
        repo.append(sample("2024-01-01T06:00:00", 7.0)).await.unwrap();

        let extent = repo
            .range_extent("2024-01-01", Some("2024-01-02"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(extent.min_volume, 3.0);
        assert_eq!(extent.max_volume, 7.0);
    }

    #[tokio::test]
    async fn should_compare_timestamps_lexicographically() {
        // A date-only cutoff sorts before any timestamp on that day.
        let repo = setup().await;
        repo.append(sample("2024-01-01T00:00:00", 2.0)).await.unwrap();

        let extent = repo.range_extent("2024-01-01", None).await.unwrap();

        assert!(extent.is_some());
    }
}
