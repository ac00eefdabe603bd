//! Row models for the `temperatures` and `humidities` tables.

use serde::Serialize;
use sqlx::FromRow;

/// A row from one of the reading tables.
///
/// `recorded_at` stays text here; parsing into a typed timestamp happens
/// exactly once, in the store adapter, so time arithmetic never round-trips
/// through strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingRow {
    pub recorded_at: String,
    pub value: f64,
}
