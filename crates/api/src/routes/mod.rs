//! Route registration.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod history;
pub mod live;

/// All versioned API routes, mounted under `/api/v1` by the entrypoint.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(history::router())
        .merge(live::router())
}
