//! Server configuration

/// Server configuration - every knob in one injected struct
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATABASE_PATH | customers.db | SQLite database file |
/// | ENVIRONMENT | development | Runtime environment |
/// | ALLOWED_ORIGINS | http://localhost:5173 | Comma-separated CORS allow-list |
/// | DEFAULT_LIMIT | 10 | List page size when `limit` is absent |
/// | MAX_LIMIT | 50 | Hard ceiling; larger `limit` values are clamped |
/// | LOG_LEVEL | info | Log level (RUST_LOG overrides) |
/// | LOG_DIR | (unset) | Daily rolling log file directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_PATH=/data/customers.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,

    // === CORS ===
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Value of Access-Control-Allow-Methods on preflight responses
    pub allowed_methods: String,
    /// Value of Access-Control-Allow-Headers on preflight responses
    pub allowed_headers: String,
    /// Preflight cache duration in seconds
    pub cors_max_age_secs: u64,

    // === Pagination ===
    /// Page size when the client sends no limit
    pub default_limit: i64,
    /// Ceiling applied to client-supplied limits
    pub max_limit: i64,

    // === Logging ===
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "customers.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_else(|_| vec!["http://localhost:5173".into()]),
            allowed_methods: "GET,POST,PATCH,DELETE,OPTIONS".into(),
            allowed_headers: "Content-Type,Authorization".into(),
            cors_max_age_secs: 86400,

            default_limit: std::env::var("DEFAULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_limit: std::env::var("MAX_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the parts that matter in test scenarios
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_keep_defaults_elsewhere() {
        let config = Config::with_overrides("/tmp/test.db", 9999);
        assert_eq!(config.database_path, "/tmp/test.db");
        assert_eq!(config.http_port, 9999);
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.max_limit, 50);
        assert_eq!(config.allowed_methods, "GET,POST,PATCH,DELETE,OPTIONS");
    }
}
