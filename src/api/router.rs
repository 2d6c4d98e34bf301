use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, borrow_book, extend_loan, get_book, return_book};

/// Creates the API router with all library endpoints
///
/// - GET /Book?title=... - Look up a book
/// - POST /Borrow - Borrow a copy
/// - POST /Extend - Extend a loan
/// - POST /Return - Return a copy
///
/// Any other method on these paths is answered with 405.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/Book", get(get_book))
        .route("/Borrow", post(borrow_book))
        .route("/Extend", post(extend_loan))
        .route("/Return", post(return_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
