use axum::{
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::error::panic_response;

fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::method_not_allowed)
}

fn post_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(handlers::method_not_allowed)
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get_only(handlers::health))
        .route("/health", get_only(handlers::health))
        // JSON API
        .route("/api/dasha", post_only(handlers::dasha::calculate))
        .route("/api/compare", post_only(handlers::compare::calculate))
        .route("/api/numerology", post_only(handlers::numerology::calculate))
        .route("/api/records", get_only(handlers::records::list))
        // Legacy form paths
        .route("/calculate/", post_only(handlers::dasha::calculate))
        .route("/calculate_comparison/", post_only(handlers::compare::calculate))
        .route("/numerology/calculate/", post_only(handlers::numerology::calculate))
        .fallback(handlers::not_found)
        // State and middleware
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
