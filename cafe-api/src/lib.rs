//! Cafe API
//!
//! A small REST service over a single `cafe` table:
//!
//! - **Database** (`db`): SQLite pool, schema bootstrap, cafe queries
//! - **HTTP API** (`api`): routes, handlers and middleware stack
//! - **Bootstrap** (`config`, `state`, `logger`): environment configuration
//!   and shared state handed to every handler

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod state;

pub use api::build_app;
pub use config::Config;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
