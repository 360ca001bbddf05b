//! Authentication handlers: registration, login, current account

use super::{
    accounts::{AccountInfo, AuthResponse, LoginRequest, RegisterRequest},
    Principal,
};
use crate::{error::ApiError, AppState};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

/// Register a new account
///
/// Creates the account, then issues a bearer token so the client is logged
/// in immediately.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Duplicate email or invalid input")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let account = state.accounts.register(request)?;
    let token = state
        .tokens
        .issue(&account.id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Account registered: {}", account.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: account.id,
            name: account.name,
            email: account.email,
            token,
        }),
    ))
}

/// Authenticate and obtain a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let account = state.accounts.verify(&request.email, &request.password)?;
    let token = state
        .tokens
        .issue(&account.id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Account logged in: {}", account.id);
    Ok(Json(AuthResponse {
        id: account.id,
        name: account.name,
        email: account.email,
        token,
    }))
}

/// Get the currently authenticated account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = AccountInfo),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn me(principal: Principal) -> Json<AccountInfo> {
    Json(principal.account.to_info())
}
