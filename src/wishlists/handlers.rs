// HTTP handlers for wishlist endpoints

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
use crate::wishlists::models::{CreateWishlistRequest, UpdateWishlistRequest, Wishlist};
use crate::AppState;

/// Get all wishlists for the authenticated user
/// GET /api/wishlists
pub async fn list_wishlists_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<Wishlist>>>, ApiError> {
    let wishlists = state.wishlists.list(user.user_id).await?;

    Ok(Json(ApiResponse::new(
        "Wishlists retrieved successfully",
        wishlists,
    )))
}

/// Create a wishlist
/// POST /api/wishlists
pub async fn create_wishlist_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(request): AppJson<CreateWishlistRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Wishlist>>), ApiError> {
    request.validate()?;

    let wishlist = state.wishlists.create(user.user_id, request.into()).await?;
    tracing::debug!(
        "Wishlist created: id={} user_id={}",
        wishlist.id,
        user.user_id
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Wishlist created successfully", wishlist)),
    ))
}

/// Update a wishlist
/// PUT /api/wishlists/:id
pub async fn update_wishlist_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateWishlistRequest>,
) -> Result<Json<ApiResponse<Wishlist>>, ApiError> {
    request.validate()?;

    let wishlist = state
        .wishlists
        .update(user.user_id, id, request.into())
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Wishlist",
        })?;

    Ok(Json(ApiResponse::new(
        "Wishlist updated successfully",
        wishlist,
    )))
}

/// Delete a wishlist
/// DELETE /api/wishlists/:id
pub async fn delete_wishlist_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.wishlists.delete(user.user_id, id).await? {
        return Err(ApiError::NotFound {
            resource: "Wishlist",
        });
    }

    Ok(Json(ApiResponse::message_only(
        "Wishlist deleted successfully",
    )))
}
