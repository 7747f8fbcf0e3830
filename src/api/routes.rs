use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/recommendations/:user_id", get(handlers::get_recommendations))
        .route("/event", post(handlers::add_event))
        .route("/events/:user_id", get(handlers::get_events))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Added after the trace layer so the request id is in place when the
        // span is created
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}
