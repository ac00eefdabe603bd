//! Storage port.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{SensorRecord, SeriesKind, TimeWindow};

/// Read access to the recorded series.
///
/// Implementations issue one range query per series using the window's
/// minute-text bounds and return records ascending by timestamp (the
/// store's own contract; the core re-checks before analysis). No retries,
/// no caching: failures surface as [`CoreError::StoreUnavailable`] or
/// [`CoreError::StoreTimeout`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_series(
        &self,
        kind: SeriesKind,
        window: &TimeWindow,
    ) -> Result<Vec<SensorRecord>, CoreError>;
}
