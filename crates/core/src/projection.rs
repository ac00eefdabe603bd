//! Timezone projection of stored series.
//!
//! A pure, order- and length-preserving 1:1 transform from stored UTC
//! records to display-ready points. Timestamps enter this crate already
//! parsed into `DateTime<Utc>` and are formatted exactly once, here, so a
//! chained double conversion is unrepresentable.

use chrono_tz::Tz;
use serde::Serialize;

use crate::types::{SensorRecord, MINUTE_FORMAT};

/// One plottable point: a wall-clock timestamp in the display timezone and
/// the reading rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    /// `YYYY-MM-DD HH:mm` in the display timezone.
    pub local_time: String,
    pub value: f64,
}

/// Project a fetched series into the display timezone.
///
/// No filtering, no aggregation: output order and length match the input
/// exactly.
pub fn project(records: &[SensorRecord], tz: Tz) -> Vec<ProjectedPoint> {
    records
        .iter()
        .map(|record| ProjectedPoint {
            local_time: record
                .recorded_at
                .with_timezone(&tz)
                .format(MINUTE_FORMAT)
                .to_string(),
            value: round2(record.value),
        })
        .collect()
}

/// Round to two decimals, half away from zero (`f64::round`), matching the
/// behaviour the stored fixtures were produced with.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
