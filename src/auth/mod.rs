//! Authentication and ownership authorization
//!
//! The request path is: extract the bearer token, verify it, load the
//! account it names, and hand the resulting [`Principal`] to the handler.
//! Mutating note handlers then pass through the ownership guard before
//! touching the store.

pub mod accounts;
pub mod guard;
pub mod handlers;
pub mod jwt;
pub mod password;

use crate::{error::ApiError, AppState, WebConfig};
use accounts::Account;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

/// Process-wide authentication configuration, fixed at startup
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret for signing and verifying bearer tokens
    pub secret: String,
    /// Token lifetime
    pub token_ttl: chrono::Duration,
    /// Argon2 time-cost factor for password hashing
    pub hash_cost: u32,
}

impl From<&WebConfig> for AuthConfig {
    fn from(config: &WebConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            token_ttl: chrono::Duration::days(config.token_ttl_days),
            hash_cost: config.hash_cost,
        }
    }
}

/// The verified identity of the caller, valid for one request
#[derive(Debug, Clone)]
pub struct Principal {
    pub account: Account,
}

impl Principal {
    /// Account id of the authenticated caller
    pub fn account_id(&self) -> &str {
        &self.account.id
    }
}

/// Extract the authenticated principal from the request
///
/// Per request: `Authorization: Bearer <token>` is verified against the
/// token issuer, then the account is loaded fresh from the credential
/// store. Every failure kind collapses into a single 401 response; the
/// specific reason is only logged.
impl<S> FromRequestParts<S> for Principal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                debug!("Request rejected: missing authorization header");
                ApiError::Unauthenticated
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Request rejected: authorization header is not a bearer credential");
            ApiError::Unauthenticated
        })?;

        let claims = state.tokens.verify(token).map_err(|e| {
            debug!("Request rejected: {}", e);
            ApiError::Unauthenticated
        })?;

        // The account may have been deleted since the token was issued
        let account = state.accounts.find_by_id(&claims.sub).ok_or_else(|| {
            debug!("Request rejected: account {} no longer exists", claims.sub);
            ApiError::Unauthenticated
        })?;

        Ok(Principal { account })
    }
}
