// HTTP handlers for note endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::notes::models::{CreateNoteRequest, Note, UpdateNoteRequest};
use crate::response::ApiResponse;
use crate::AppState;

/// Get all notes for the authenticated user
/// GET /api/notes
pub async fn list_notes_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<Note>>>, ApiError> {
    let notes = state.notes.list(user.user_id).await?;

    Ok(Json(ApiResponse::new("Notes retrieved successfully", notes)))
}

/// Create a note
/// POST /api/notes
pub async fn create_note_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(request): AppJson<CreateNoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Note>>), ApiError> {
    request.validate()?;

    let note = state.notes.create(user.user_id, request.into()).await?;
    tracing::debug!("Note created: id={} user_id={}", note.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Note created successfully", note)),
    ))
}

/// Update a note
/// PUT /api/notes/:id
pub async fn update_note_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateNoteRequest>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    request.validate()?;

    let note = state
        .notes
        .update(user.user_id, id, request.into())
        .await?
        .ok_or(ApiError::NotFound { resource: "Note" })?;

    Ok(Json(ApiResponse::new("Note updated successfully", note)))
}

/// Delete a note
/// DELETE /api/notes/:id
pub async fn delete_note_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.notes.delete(user.user_id, id).await? {
        return Err(ApiError::NotFound { resource: "Note" });
    }

    Ok(Json(ApiResponse::message_only("Note deleted successfully")))
}
