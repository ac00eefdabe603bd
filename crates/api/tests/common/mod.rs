use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use roomsense_api::config::{SensorMode, ServerConfig};
use roomsense_api::routes;
use roomsense_api::sensor::SimulatedSensor;
use roomsense_api::state::AppState;
use roomsense_core::history::HistoryService;
use roomsense_core::sensor::SensorReader;
use roomsense_db::store::SqliteRecordStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `Etc/UTC` as the server timezone so default window bounds are
/// deterministic, and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_timeout_secs: 5,
        server_timezone: chrono_tz::Etc::UTC,
        sensor_mode: SensorMode::Simulated,
    }
}

/// Build the full application router with the simulated sensor.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_sensor(pool, Arc::new(SimulatedSensor))
}

/// Build the full application router with all middleware layers, using the
/// given database pool and sensor.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_sensor(pool: SqlitePool, sensor: Arc<dyn SensorReader>) -> Router {
    let config = test_config();

    let store = SqliteRecordStore::new(pool.clone(), Duration::from_secs(config.store_timeout_secs));
    let history = HistoryService::new(Arc::new(store));

    let state = AppState {
        pool,
        config: Arc::new(config),
        history,
        sensor,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
