pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/ats/categories",
            get(handlers::handle_list_categories),
        )
        .route(
            "/api/v1/ats/categories/:id",
            get(handlers::handle_get_category),
        )
        .with_state(state)
}
