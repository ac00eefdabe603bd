use std::sync::Arc;

use roomsense_core::history::HistoryService;
use roomsense_core::sensor::SensorReader;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly only by the health probe;
    /// the history pipeline goes through `history`).
    pub pool: roomsense_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// History query engine over the record store.
    pub history: HistoryService,
    /// Live sensor capability.
    pub sensor: Arc<dyn SensorReader>,
}
