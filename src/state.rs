//! Application state shared by all handlers

use crate::{
    auth::{accounts::AccountService, jwt::TokenIssuer, AuthConfig},
    notes::NoteStore,
    WebConfig, WebError, WebResult,
};

/// Shared application state
///
/// The auth configuration is read once at startup and handed to the token
/// issuer and credential store constructors; nothing mutates it afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Credential store: registration and password verification
    pub accounts: AccountService,
    /// Bearer token issuance and verification
    pub tokens: TokenIssuer,
    /// Note persistence collaborator
    pub notes: NoteStore,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let auth_config = AuthConfig::from(&config);

        let accounts = AccountService::new(&auth_config)
            .map_err(|e| WebError::Config(format!("Failed to create account service: {}", e)))?;
        let tokens = TokenIssuer::new(&auth_config);

        Ok(Self {
            config,
            accounts,
            tokens,
            notes: NoteStore::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = AppState::new(WebConfig::default());
        assert!(state.is_ok());
    }

    #[test]
    fn test_invalid_hash_cost_rejected() {
        let config = WebConfig {
            hash_cost: 0,
            ..WebConfig::default()
        };
        assert!(AppState::new(config).is_err());
    }
}
