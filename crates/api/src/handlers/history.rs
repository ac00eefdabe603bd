//! Handler for the history query endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use roomsense_core::history::HistoryView;
use roomsense_core::window::HistoryParams;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /history`.
///
/// Everything is optional and arrives as raw strings; validation,
/// defaulting, and leniency live in the core resolver, not here.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Window start, `YYYY-MM-DD HH:mm` in the display timezone.
    pub from: Option<String>,
    /// Window end, same format.
    pub to: Option<String>,
    /// IANA display timezone id (default `Etc/UTC`).
    pub timezone: Option<String>,
    /// "Last N hours" shorthand; wins over `from`/`to` when it parses.
    pub range_h: Option<String>,
}

/// GET /history -- resolve the time selection, fetch and project both
/// series, and report sustained temperature increase minutes.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<DataResponse<HistoryView>>> {
    let params = HistoryParams {
        from: query.from,
        to: query.to,
        timezone: query.timezone,
        range_h: query.range_h,
    };

    let view = state
        .history
        .query(&params, Utc::now(), state.config.server_timezone)
        .await?;

    Ok(Json(DataResponse { data: view }))
}
