//! Cafe handlers
//!
//! Each handler parses its input, makes one call into [`crate::db::cafes`]
//! and shapes the JSON envelope.

use axum::{
    Form, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Cafe;
use shared::response::{CafeBody, CafesBody, SuccessBody};

use super::form::AddCafeForm;
use crate::db::cafes;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub new_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyQuery {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// GET /random
pub async fn random_cafe(State(state): State<AppState>) -> AppResult<Json<CafeBody<Cafe>>> {
    let cafe = cafes::pick_random(&state.pool)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::NoCafes))?;
    Ok(Json(CafeBody { cafe }))
}

/// GET /all
pub async fn all_cafes(State(state): State<AppState>) -> AppResult<Json<CafesBody<Cafe>>> {
    let cafes = cafes::list_all(&state.pool).await?;
    Ok(Json(CafesBody { cafes }))
}

/// GET /search?loc=
pub async fn search_cafes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<CafesBody<Cafe>>> {
    let Some(location) = query.loc else {
        return Err(AppError::new(ErrorCode::LocationNotFound));
    };

    let cafes = cafes::find_by_location(&state.pool, &location).await?;
    if cafes.is_empty() {
        return Err(AppError::new(ErrorCode::LocationNotFound));
    }
    Ok(Json(CafesBody { cafes }))
}

/// POST /add
pub async fn add_cafe(
    State(state): State<AppState>,
    Form(form): Form<AddCafeForm>,
) -> AppResult<Json<SuccessBody>> {
    let data = form.into_create()?;
    let id = cafes::insert(&state.pool, &data).await?;

    tracing::info!(cafe_id = id, name = ?data.name, "Cafe added");
    Ok(Json(SuccessBody::new("Successfully added the new cafe.")))
}

/// PATCH /update-price/{id}?new_price=
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PriceQuery>,
) -> AppResult<Json<SuccessBody>> {
    cafes::update_price(&state.pool, id, query.new_price.as_deref()).await?;

    tracing::info!(cafe_id = id, new_price = ?query.new_price, "Cafe price updated");
    Ok(Json(SuccessBody::new("Successfully updated the price.")))
}

/// DELETE /report-closed/{id}?api-key=
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ApiKeyQuery>,
) -> AppResult<Json<SuccessBody>> {
    if !state.is_authorized(query.api_key.as_deref()) {
        tracing::warn!(cafe_id = id, "Rejected delete with wrong api key");
        return Err(AppError::forbidden());
    }

    cafes::delete(&state.pool, id).await?;

    tracing::info!(cafe_id = id, "Cafe reported closed and deleted");
    Ok(Json(SuccessBody::new("Successfully deleted the cafe.")))
}
