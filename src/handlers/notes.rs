//! Note CRUD handlers
//!
//! Thin field-copying layers over the note store. Listing is scoped to the
//! principal at the store boundary; update and delete fetch the note, run
//! the ownership guard, and only then touch the store.

use super::types::{CreateNoteRequest, DeletedNoteResponse};
use crate::{
    auth::{
        guard::{check_owner, Operation},
        Principal,
    },
    error::ApiError,
    notes::{Note, NotePatch},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

/// List the principal's notes, newest first
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "Notes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notes owned by the caller", body = [Note]),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn list_notes(
    State(state): State<AppState>,
    principal: Principal,
) -> Json<Vec<Note>> {
    Json(state.notes.find_by_owner(principal.account_id()))
}

/// Create a note owned by the principal
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "Notes",
    security(("bearer_auth" = [])),
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    principal: Principal,
    Json(request): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let title = request
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please add a title and content".to_string()))?;
    let content = request
        .content
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Please add a title and content".to_string()))?;

    let note = state.notes.insert(
        principal.account_id(),
        title,
        content,
        request.is_favorite.unwrap_or(false),
    );

    info!("Note {} created by {}", note.id, principal.account_id());
    Ok((StatusCode::CREATED, Json(note)))
}

/// Update a note the principal owns
#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "Notes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Note id")),
    request_body = NotePatch,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Note belongs to another account"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<Note>, ApiError> {
    let note = state
        .notes
        .find_by_id(&id)
        .ok_or(ApiError::NotFound("Note"))?;
    check_owner(&principal, &note.owner_id, Operation::Mutate)?;

    let updated = state
        .notes
        .update(&id, patch)
        .ok_or(ApiError::NotFound("Note"))?;

    info!("Note {} updated by {}", id, principal.account_id());
    Ok(Json(updated))
}

/// Delete a note the principal owns
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "Notes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = DeletedNoteResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Note belongs to another account"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<DeletedNoteResponse>, ApiError> {
    let note = state
        .notes
        .find_by_id(&id)
        .ok_or(ApiError::NotFound("Note"))?;
    check_owner(&principal, &note.owner_id, Operation::Delete)?;

    if !state.notes.delete(&id) {
        return Err(ApiError::NotFound("Note"));
    }

    info!("Note {} deleted by {}", id, principal.account_id());
    Ok(Json(DeletedNoteResponse { id }))
}
