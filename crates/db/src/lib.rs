//! SQLite persistence for roomsense.
//!
//! Pool management, migrations, the reading repository, and the
//! [`store::SqliteRecordStore`] adapter behind the core's `RecordStore`
//! port.

pub mod models;
pub mod repositories;
pub mod store;

use sqlx::sqlite::SqlitePoolOptions;

/// Shared connection pool type used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool for the given SQLite URL.
///
/// `sqlite://path?mode=rwc` creates the database file on first run.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Cheap liveness probe used by the health endpoint and at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
