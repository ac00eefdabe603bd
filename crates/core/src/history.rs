//! History query assembly.
//!
//! Orchestrates the full pipeline for one request: resolve the caller's
//! time selection, fetch both series, project them into the display
//! timezone, analyze temperature streaks, and assemble the view model.
//! Any upstream error short-circuits; the view is all-or-nothing.

use std::sync::Arc;

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::CoreError;
use crate::projection::{self, ProjectedPoint};
use crate::store::RecordStore;
use crate::streak;
use crate::types::{SensorRecord, SeriesKind, Timestamp};
use crate::window::{self, HistoryParams};

/// The assembled response view model for a history query.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    /// Echoed display timezone (canonical IANA id).
    pub timezone: String,
    /// Temperature series, projected and rounded.
    pub temperature: Vec<ProjectedPoint>,
    /// Humidity series, projected and rounded.
    pub humidity: Vec<ProjectedPoint>,
    /// Sum of adjusted minutes over all qualifying temperature streaks.
    pub total_increase_minutes: i64,
    /// Echoed window start, wall-clock in the display timezone.
    pub from_date: String,
    /// Echoed window end.
    pub to_date: String,
    /// Covered span in hours (negative for reversed input, propagated).
    pub range_hours: f64,
    /// Adjusted minutes per retained streak, for debugging.
    pub streak_minutes: Vec<i64>,
}

/// Request-scoped history query engine over a [`RecordStore`].
#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn RecordStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Run one history query end to end.
    ///
    /// `now` and `server_tz` parameterize window resolution; see
    /// [`window::resolve`]. The two series fetches have no data dependency
    /// and run concurrently.
    pub async fn query(
        &self,
        params: &HistoryParams,
        now: Timestamp,
        server_tz: Tz,
    ) -> Result<HistoryView, CoreError> {
        let resolved = window::resolve(params, now, server_tz)?;
        let window = resolved.window;

        let (temperatures, humidities) = tokio::try_join!(
            self.store.fetch_series(SeriesKind::Temperature, &window),
            self.store.fetch_series(SeriesKind::Humidity, &window),
        )?;

        ensure_ascending(SeriesKind::Temperature, &temperatures)?;
        ensure_ascending(SeriesKind::Humidity, &humidities)?;

        let temperature = projection::project(&temperatures, window.tz);
        let humidity = projection::project(&humidities, window.tz);

        // Streaks are measured on the rounded values the caller sees.
        let interval = streak::sample_interval_minutes(&temperatures);
        let values: Vec<f64> = temperature.iter().map(|p| p.value).collect();
        let summary = streak::sustained_increase_minutes(&values, interval);

        tracing::debug!(
            temperature_points = temperature.len(),
            humidity_points = humidity.len(),
            interval_minutes = interval,
            total_increase_minutes = summary.total_minutes,
            "Assembled history view"
        );

        Ok(HistoryView {
            timezone: window.tz.name().to_string(),
            temperature,
            humidity,
            total_increase_minutes: summary.total_minutes,
            from_date: resolved.from_display,
            to_date: resolved.to_display,
            range_hours: resolved.range_hours,
            streak_minutes: summary.minutes,
        })
    }
}

/// The store contract guarantees ascending order; a violation is a data
/// error, not something to silently re-sort.
fn ensure_ascending(kind: SeriesKind, records: &[SensorRecord]) -> Result<(), CoreError> {
    let ordered = records
        .windows(2)
        .all(|pair| pair[0].recorded_at <= pair[1].recorded_at);
    if ordered {
        Ok(())
    } else {
        Err(CoreError::CorruptSeries(format!(
            "{} series is not ascending by timestamp",
            kind.table()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;

    use crate::types::TimeWindow;

    const UTC_TZ: Tz = chrono_tz::Etc::UTC;

    /// In-memory store returning canned series regardless of the window.
    struct FixedStore {
        temperatures: Vec<SensorRecord>,
        humidities: Vec<SensorRecord>,
    }

    #[async_trait]
    impl RecordStore for FixedStore {
        async fn fetch_series(
            &self,
            kind: SeriesKind,
            _window: &TimeWindow,
        ) -> Result<Vec<SensorRecord>, CoreError> {
            Ok(match kind {
                SeriesKind::Temperature => self.temperatures.clone(),
                SeriesKind::Humidity => self.humidities.clone(),
            })
        }
    }

    /// Store whose every fetch fails.
    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn fetch_series(
            &self,
            _kind: SeriesKind,
            _window: &TimeWindow,
        ) -> Result<Vec<SensorRecord>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
    }

    fn record(h: u32, mi: u32, value: f64) -> SensorRecord {
        SensorRecord {
            recorded_at: Utc.with_ymd_and_hms(2024, 2, 1, h, mi, 0).unwrap(),
            value,
        }
    }

    fn day_params() -> HistoryParams {
        HistoryParams {
            from: Some("2024-02-01 00:00".into()),
            to: Some("2024-02-02 00:00".into()),
            timezone: None,
            range_h: None,
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn assembles_full_view() {
        let service = HistoryService::new(Arc::new(FixedStore {
            temperatures: vec![
                record(10, 0, 1.0),
                record(10, 5, 2.0),
                record(10, 10, 3.0),
                record(10, 15, 4.0),
            ],
            humidities: vec![record(10, 0, 40.0), record(10, 5, 41.0)],
        }));

        let view = service.query(&day_params(), now(), UTC_TZ).await.unwrap();

        assert_eq!(view.timezone, "Etc/UTC");
        assert_eq!(view.temperature.len(), 4);
        assert_eq!(view.humidity.len(), 2);
        assert_eq!(view.from_date, "2024-02-01 00:00");
        assert_eq!(view.to_date, "2024-02-02 00:00");
        assert_eq!(view.range_hours, 24.0);
        // One 4-sample streak at 5-minute spacing: 4*5 - 1 = 19 minutes.
        assert_eq!(view.streak_minutes, [19]);
        assert_eq!(view.total_increase_minutes, 19);
    }

    #[tokio::test]
    async fn empty_series_degrade_to_zero_totals() {
        let service = HistoryService::new(Arc::new(FixedStore {
            temperatures: vec![],
            humidities: vec![],
        }));

        let view = service.query(&day_params(), now(), UTC_TZ).await.unwrap();

        assert!(view.temperature.is_empty());
        assert!(view.humidity.is_empty());
        assert_eq!(view.total_increase_minutes, 0);
        assert!(view.streak_minutes.is_empty());
    }

    #[tokio::test]
    async fn streaks_use_the_rounded_values() {
        // Raw values increase, but all round to 1.0: no streak survives.
        let service = HistoryService::new(Arc::new(FixedStore {
            temperatures: vec![
                record(10, 0, 1.001),
                record(10, 1, 1.002),
                record(10, 2, 1.004),
            ],
            humidities: vec![],
        }));

        let view = service.query(&day_params(), now(), UTC_TZ).await.unwrap();

        assert_eq!(view.total_increase_minutes, 0);
    }

    #[tokio::test]
    async fn out_of_order_series_is_a_data_error() {
        let service = HistoryService::new(Arc::new(FixedStore {
            temperatures: vec![record(10, 5, 1.0), record(10, 0, 2.0)],
            humidities: vec![],
        }));

        let err = service.query(&day_params(), now(), UTC_TZ).await.unwrap_err();
        assert!(matches!(err, CoreError::CorruptSeries(_)));
    }

    #[tokio::test]
    async fn store_failures_short_circuit() {
        let service = HistoryService::new(Arc::new(BrokenStore));

        let err = service.query(&day_params(), now(), UTC_TZ).await.unwrap_err();
        assert!(matches!(err, CoreError::StoreUnavailable(_)));
    }
}
