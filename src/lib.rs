//! Jotter Web Server
//!
//! A personal note-taking service: accounts register and log in, then
//! create, read, update, and delete notes they own. Ownership is enforced
//! on every mutating note operation.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod notes;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use error::ApiError;
pub use server::JotterServer;
pub use state::AppState;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    // Configure CORS for the SPA client
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_origin("http://127.0.0.1:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    Router::new()
        // API routes
        .nest("/api", routes::api_routes())
        // OpenAPI documentation
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Token lifetime in days
    pub token_ttl_days: i64,
    /// Argon2 time-cost factor for password hashing
    pub hash_cost: u32,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: "jotter-default-secret-change-in-production".to_string(),
            token_ttl_days: 30,
            hash_cost: 2,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("JOTTER_HOST").unwrap_or(defaults.host),
            port: std::env::var("JOTTER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: std::env::var("JOTTER_JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_days: std::env::var("JOTTER_TOKEN_TTL_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(defaults.token_ttl_days),
            hash_cost: std::env::var("JOTTER_HASH_COST")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.hash_cost),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jotter=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
