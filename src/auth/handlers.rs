// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::{
    error::AuthError,
    models::{AuthPayload, LoginRequest, RegisterRequest},
};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::AppState;

/// Register a new user
/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthPayload>>), AuthError> {
    let payload = state.auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("User registered successfully", payload)),
    ))
}

/// Login a user
/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthPayload>>, AuthError> {
    let payload = state.auth.login(request).await?;

    Ok(Json(ApiResponse::new("Login successful", payload)))
}
