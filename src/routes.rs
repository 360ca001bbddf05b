//! Route definitions for the Jotter web server

use crate::{auth, handlers, AppState};
use axum::{
    routing::{get, post, put},
    Router,
};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Authentication
        .route("/auth/register", post(auth::handlers::register))
        .route("/auth/login", post(auth::handlers::login))
        .route("/auth/me", get(auth::handlers::me))
        // Notes
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/{id}",
            put(handlers::update_note).delete(handlers::delete_note),
        )
}
