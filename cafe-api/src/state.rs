//! Application state shared by every handler

use sqlx::SqlitePool;

use crate::BoxError;
use crate::config::Config;
use crate::db::DbService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Shared secret required by `/report-closed`
    pub api_key: Option<String>,
}

impl AppState {
    /// Open the database and build the state from configuration
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let db = DbService::new(&config.db_uri, config.db_max_connections).await?;

        if config.api_key.is_none() {
            tracing::warn!("API_KEY is not set; /report-closed will refuse every request");
        }

        Ok(Self::with_pool(db.pool, config.api_key.clone()))
    }

    /// Build the state around an existing pool
    pub fn with_pool(pool: SqlitePool, api_key: Option<String>) -> Self {
        Self { pool, api_key }
    }

    /// Whether `candidate` matches the configured api key
    pub fn is_authorized(&self, candidate: Option<&str>) -> bool {
        match (self.api_key.as_deref(), candidate) {
            (Some(expected), Some(given)) => {
                constant_time_eq(expected.as_bytes(), given.as_bytes())
            }
            _ => false,
        }
    }
}

/// Byte comparison whose running time depends only on the lengths
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
