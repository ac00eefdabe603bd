//! Route definitions for the history query engine.
//!
//! ```text
//! GET  /history   -> history (from, to, timezone, range_h query params)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(history::history))
}
