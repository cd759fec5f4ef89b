// HTTP handlers for shopping list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::lists::models::{CreateListRequest, List, UpdateListRequest};
use crate::response::ApiResponse;
use crate::AppState;

/// Get all shopping lists for the authenticated user
/// GET /api/lists
pub async fn list_lists_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<List>>>, ApiError> {
    let lists = state.lists.list(user.user_id).await?;

    Ok(Json(ApiResponse::new("Lists retrieved successfully", lists)))
}

/// Create a shopping list
/// POST /api/lists
pub async fn create_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(request): AppJson<CreateListRequest>,
) -> Result<(StatusCode, Json<ApiResponse<List>>), ApiError> {
    request.validate()?;

    let list = state.lists.create(user.user_id, request.into()).await?;
    tracing::debug!("List created: id={} user_id={}", list.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("List created successfully", list)),
    ))
}

/// Update a shopping list
/// PUT /api/lists/:id
pub async fn update_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateListRequest>,
) -> Result<Json<ApiResponse<List>>, ApiError> {
    request.validate()?;

    let list = state
        .lists
        .update(user.user_id, id, request.into())
        .await?
        .ok_or(ApiError::NotFound { resource: "List" })?;

    Ok(Json(ApiResponse::new("List updated successfully", list)))
}

/// Delete a shopping list
/// DELETE /api/lists/:id
pub async fn delete_list_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.lists.delete(user.user_id, id).await? {
        return Err(ApiError::NotFound { resource: "List" });
    }

    Ok(Json(ApiResponse::message_only("List deleted successfully")))
}
