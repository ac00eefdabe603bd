//! Handler for the live reading endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Current conditions as read from the sensor capability.
#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    /// Display convenience; the stored history is what the query engine
    /// serves, this is just the live page's preferred unit.
    pub temperature_f: f64,
    pub humidity: f64,
}

/// GET /live -- one reading from the sensor, 503 when it cannot be read.
pub async fn current_conditions(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CurrentConditions>>> {
    let sample = state
        .sensor
        .read_current()
        .await
        .ok_or(AppError::SensorUnavailable)?;

    Ok(Json(DataResponse {
        data: CurrentConditions {
            temperature_c: sample.temperature_c,
            temperature_f: sample.temperature_c * 9.0 / 5.0 + 32.0,
            humidity: sample.humidity,
        },
    }))
}
