//! Common request and response types used across handlers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Note creation request
///
/// Fields are optional at the serde level so that missing ones produce a
/// 400 validation error instead of a generic deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[schema(example = "Shopping list")]
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// Response body for a deleted note
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedNoteResponse {
    pub id: String,
}
