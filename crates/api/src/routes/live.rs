//! Route definitions for the live sensor reading.
//!
//! ```text
//! GET  /live   -> current_conditions
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::live;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/live", get(live::current_conditions))
}
