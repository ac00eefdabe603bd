//! Live sensor port.

use async_trait::async_trait;

use crate::types::SensorSample;

/// The live environmental sensor capability.
///
/// `None` means the sensor could not be read right now; callers surface
/// that as a retryable condition rather than an internal failure.
#[async_trait]
pub trait SensorReader: Send + Sync {
    async fn read_current(&self) -> Option<SensorSample>;
}
