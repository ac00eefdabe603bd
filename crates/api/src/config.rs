use chrono_tz::Tz;

/// How the live sensor capability is provided.
///
/// Real GPIO drivers live outside this service; the API consumes whatever
/// `SENSOR_MODE` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorMode {
    /// Plausible canned readings, for development and demos.
    Simulated,
    /// No sensor attached; the live endpoint reports unavailable.
    Disabled,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-query record store timeout in seconds (default: `10`).
    pub store_timeout_secs: u64,
    /// Zone in which default window bounds ("today 00:00", "now") are
    /// rendered (default: `Etc/UTC`).
    pub server_timezone: Tz,
    /// Live sensor source (default: `simulated`).
    pub sensor_mode: SensorMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_TIMEOUT_SECS`   | `10`                       |
    /// | `SERVER_TIMEZONE`      | `Etc/UTC`                  |
    /// | `SENSOR_MODE`          | `simulated`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        let server_timezone: Tz = std::env::var("SERVER_TIMEZONE")
            .unwrap_or_else(|_| "Etc/UTC".into())
            .parse()
            .expect("SERVER_TIMEZONE must be a known IANA zone id");

        let sensor_mode = match std::env::var("SENSOR_MODE")
            .unwrap_or_else(|_| "simulated".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "simulated" => SensorMode::Simulated,
            "disabled" => SensorMode::Disabled,
            other => panic!("SENSOR_MODE must be 'simulated' or 'disabled', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_timeout_secs,
            server_timezone,
            sensor_mode,
        }
    }
}
