//! Server configuration

use crate::BoxError;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string (env: DB_URI), e.g. `sqlite:cafes.db`
    pub db_uri: String,
    /// Shared secret for `/report-closed` (env: API_KEY). Deletes are refused when unset.
    pub api_key: Option<String>,
    /// Bind address (env: HTTP_HOST)
    pub http_host: String,
    /// Bind port (env: HTTP_PORT)
    pub http_port: u16,
    /// Pool size (env: DB_MAX_CONNECTIONS)
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let db_uri = get("DB_URI")
            .filter(|s| !s.is_empty())
            .ok_or("DB_URI must be set")?;

        Ok(Self {
            db_uri,
            api_key: get("API_KEY").filter(|s| !s.is_empty()),
            http_host: get("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            db_max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
        })
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
