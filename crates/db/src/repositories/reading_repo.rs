//! Repository for the recorded reading tables.

use roomsense_core::types::SeriesKind;
use sqlx::SqlitePool;

use crate::models::reading::ReadingRow;

const READING_COLUMNS: &str = "recorded_at, value";

/// Range queries and inserts over the `temperatures` / `humidities` tables.
///
/// Table names come from [`SeriesKind::table`] (static strings), never from
/// caller input.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Fetch all readings with `from_text <= recorded_at <= to_text`,
    /// ascending by timestamp. Bounds are minute-text UTC keys compared
    /// lexicographically, so a stored key carrying seconds inside the
    /// window is included, but one in the `to` minute itself sorts above
    /// the bound and falls out. That minute-precision cutoff is the
    /// store's key format, kept as-is.
    pub async fn fetch_range(
        pool: &SqlitePool,
        kind: SeriesKind,
        from_text: &str,
        to_text: &str,
    ) -> Result<Vec<ReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {READING_COLUMNS} FROM {table} \
             WHERE recorded_at BETWEEN ?1 AND ?2 \
             ORDER BY recorded_at",
            table = kind.table()
        );
        sqlx::query_as::<_, ReadingRow>(&query)
            .bind(from_text)
            .bind(to_text)
            .fetch_all(pool)
            .await
    }

    /// Insert one reading. Used by the recording side and by tests.
    pub async fn insert(
        pool: &SqlitePool,
        kind: SeriesKind,
        recorded_at: &str,
        value: f64,
    ) -> Result<(), sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (recorded_at, value) VALUES (?1, ?2)",
            table = kind.table()
        );
        sqlx::query(&query)
            .bind(recorded_at)
            .bind(value)
            .execute(pool)
            .await
            .map(|_| ())
    }
}
