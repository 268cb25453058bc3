pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

/// Uploads are PDF files; allow a batch of a few of them per request.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluations", post(handlers::evaluate_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
