//! Jotter Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Jotter web server
pub struct JotterServer {
    config: WebConfig,
    state: AppState,
}

impl JotterServer {
    /// Create a new Jotter server
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone())?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting Jotter Web Server");
        info!("📍 Server address: http://{}", address);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for JotterServer
pub struct JotterServerBuilder {
    config: WebConfig,
}

impl JotterServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::from_env(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    /// Set the token lifetime in days
    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.config.token_ttl_days = days;
        self
    }

    /// Build the server
    pub fn build(self) -> WebResult<JotterServer> {
        JotterServer::new(self.config)
    }
}

impl Default for JotterServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to start a server with environment configuration
pub async fn start_server() -> WebResult<()> {
    let config = WebConfig::from_env();
    let server = JotterServer::new(config)?;
    server.start().await
}
