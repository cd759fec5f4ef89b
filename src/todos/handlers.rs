// HTTP handlers for todo endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::todos::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::AppState;

/// Get all todos for the authenticated user
/// GET /api/todos
pub async fn list_todos_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    let todos = state.todos.list(user.user_id).await?;

    Ok(Json(ApiResponse::new("Todos retrieved successfully", todos)))
}

/// Create a todo
/// POST /api/todos
pub async fn create_todo_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(request): AppJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Todo>>), ApiError> {
    request.validate()?;

    let todo = state.todos.create(user.user_id, request.into()).await?;
    tracing::debug!("Todo created: id={} user_id={}", todo.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Todo created successfully", todo)),
    ))
}

/// Update a todo
/// PUT /api/todos/:id
pub async fn update_todo_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateTodoRequest>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    request.validate()?;

    let todo = state
        .todos
        .update(user.user_id, id, request.into())
        .await?
        .ok_or(ApiError::NotFound { resource: "Todo" })?;

    Ok(Json(ApiResponse::new("Todo updated successfully", todo)))
}

/// Delete a todo
/// DELETE /api/todos/:id
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.todos.delete(user.user_id, id).await? {
        return Err(ApiError::NotFound { resource: "Todo" });
    }

    Ok(Json(ApiResponse::message_only("Todo deleted successfully")))
}
