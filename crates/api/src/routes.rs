use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state. Mounted under `/api` by the server.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/dig", get(handlers::dig_query).post(handlers::dig_body))
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}
