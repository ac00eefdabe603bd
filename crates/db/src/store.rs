//! [`RecordStore`] adapter over the SQLite reading tables.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use roomsense_core::error::CoreError;
use roomsense_core::store::RecordStore;
use roomsense_core::types::{SensorRecord, SeriesKind, TimeWindow, MINUTE_FORMAT};

use crate::models::reading::ReadingRow;
use crate::repositories::ReadingRepo;
use crate::DbPool;

/// Stored keys may carry seconds (the recording side writes them); the
/// query bounds never do.
const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQLite-backed record store with a per-query timeout.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: DbPool,
    query_timeout: Duration,
}

impl SqliteRecordStore {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn fetch_series(
        &self,
        kind: SeriesKind,
        window: &TimeWindow,
    ) -> Result<Vec<SensorRecord>, CoreError> {
        let from_text = window.from_text();
        let to_text = window.to_text();
        let fetch = ReadingRepo::fetch_range(&self.pool, kind, &from_text, &to_text);
        let rows = tokio::time::timeout(self.query_timeout, fetch)
            .await
            .map_err(|_| CoreError::StoreTimeout)?
            .map_err(|err| {
                tracing::error!(error = %err, table = kind.table(), "Range query failed");
                CoreError::StoreUnavailable(err.to_string())
            })?;

        decode_rows(kind, rows)
    }
}

/// Parse the stored text keys into typed UTC timestamps.
fn decode_rows(kind: SeriesKind, rows: Vec<ReadingRow>) -> Result<Vec<SensorRecord>, CoreError> {
    rows.into_iter()
        .map(|row| {
            let recorded_at = parse_stored_timestamp(&row.recorded_at).ok_or_else(|| {
                CoreError::Internal(format!(
                    "unreadable timestamp {:?} in table {}",
                    row.recorded_at,
                    kind.table()
                ))
            })?;
            Ok(SensorRecord {
                recorded_at,
                value: row.value,
            })
        })
        .collect()
}

fn parse_stored_timestamp(text: &str) -> Option<roomsense_core::types::Timestamp> {
    NaiveDateTime::parse_from_str(text, SECONDS_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, MINUTE_FORMAT))
        .ok()
        .map(|naive| naive.and_utc())
}
