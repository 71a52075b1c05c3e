//! Database Module
//!
//! Owns the SQLite connection pool and the `cafe` table schema.

pub mod cafes;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Database service owning a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database at `db_uri` and make sure the schema exists
    pub async fn new(db_uri: &str, max_connections: u32) -> RepoResult<Self> {
        let options = SqliteConnectOptions::from_str(db_uri)
            .map_err(|e| RepoError::Database(format!("Invalid database uri: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        ensure_schema(&pool).await?;
        tracing::info!("Database schema ready");

        Ok(Self { pool })
    }
}

/// Create the `cafe` table if it does not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> RepoResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cafe (
            id INTEGER PRIMARY KEY,
            name VARCHAR(250) NOT NULL UNIQUE,
            map_url VARCHAR(500) NOT NULL,
            img_url VARCHAR(500) NOT NULL,
            location VARCHAR(250) NOT NULL,
            seats VARCHAR(250) NOT NULL,
            has_toilet BOOLEAN NOT NULL,
            has_wifi BOOLEAN NOT NULL,
            has_sockets BOOLEAN NOT NULL,
            can_take_calls BOOLEAN NOT NULL,
            coffee_price VARCHAR(250)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_cafe_location ON cafe (location)")
        .execute(pool)
        .await?;

    Ok(())
}
