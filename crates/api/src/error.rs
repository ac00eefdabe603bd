use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomsense_core::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomsense_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx (only reachable outside the core
    /// pipeline, e.g. the health probe).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The live sensor could not be read.
    #[error("Sensor unavailable")]
    SensorUnavailable,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidTimezone(zone) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_TIMEZONE",
                    format!("Unknown timezone: {zone}"),
                ),
                CoreError::StoreUnavailable(msg) => {
                    tracing::error!(error = %msg, "Record store unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "STORE_UNAVAILABLE",
                        "Record store unavailable, try again".to_string(),
                    )
                }
                CoreError::StoreTimeout => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_TIMEOUT",
                    "Record store query timed out, try again".to_string(),
                ),
                CoreError::CorruptSeries(msg) | CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::SensorUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SENSOR_UNAVAILABLE",
                "Sensor unavailable, try again".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
