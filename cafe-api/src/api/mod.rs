//! HTTP routes

pub mod cafes;
pub mod form;
pub mod health;
pub mod home;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, patch, post};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware or state
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(cafes::search_cafes))
        .route("/add", post(cafes::add_cafe))
        .route("/update-price/{id}", patch(cafes::update_price))
        .route("/report-closed/{id}", delete(cafes::report_closed))
        .route("/health", get(health::health_check))
}

/// Fully configured application: routes, middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        // Every origin is allowed on every route
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Layers added last run first: the id is set before it is propagated
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
