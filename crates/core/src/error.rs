#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Record store query timed out")]
    StoreTimeout,

    #[error("Corrupt series: {0}")]
    CorruptSeries(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
