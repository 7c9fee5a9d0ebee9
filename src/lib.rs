// Library crate for the word cloud server
// This file exposes the public API for integration tests

pub mod config;
pub mod session;
pub mod shared;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use session::{
    models::{ResponseModel, SessionModel},
    repository::{InMemorySessionRepository, SessionRepository},
};
pub use shared::{AppError, AppState};

/// Builds the JSON API router over the given state
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/create-session", post(session::create_session))
        .route("/api/session/:code", get(session::session_status))
        .route("/api/submit", post(session::submit_response))
        .route("/api/responses", get(session::list_responses))
        .route("/api/clear", post(session::clear_responses))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
