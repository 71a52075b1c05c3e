//! Health check endpoint

use axum::{Json, extract::State};

use crate::db::cafes;
use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let total = cafes::count(&state.pool).await.ok();
    let status = if total.is_some() { "ok" } else { "degraded" };

    Json(serde_json::json!({
        "status": status,
        "service": "cafe-api",
        "version": env!("CARGO_PKG_VERSION"),
        "db": total.is_some(),
        "cafes": total,
    }))
}
