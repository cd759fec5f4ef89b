// Wishlist data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

fn default_quantity() -> i32 {
    1
}

/// One entry in a wishlist. Carries a `bought` flag so purchased items can
/// be ticked off without leaving the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WishlistItem {
    #[validate(custom = "not_blank")]
    pub name: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub bought: bool,
}

/// A titled collection of wished-for items owned by a single user
#[derive(Debug, Clone, Serialize)]
pub struct Wishlist {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub items: Vec<WishlistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a wishlist; `items` defaults to empty
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateWishlistRequest {
    #[validate(custom = "not_blank")]
    pub title: String,
    #[serde(default)]
    #[validate]
    pub items: Vec<WishlistItem>,
}

/// Request DTO for updating a wishlist; `items`, when present, replaces
/// the whole collection, bought flags included
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateWishlistRequest {
    #[validate(custom = "not_blank")]
    pub title: Option<String>,
    #[validate]
    pub items: Option<Vec<WishlistItem>>,
}

fn normalize_items(items: Vec<WishlistItem>) -> Vec<WishlistItem> {
    items
        .into_iter()
        .map(|item| WishlistItem {
            name: item.name.trim().to_string(),
            ..item
        })
        .collect()
}

/// Validated, normalized input for the store
#[derive(Debug, Clone)]
pub struct NewWishlist {
    pub title: String,
    pub items: Vec<WishlistItem>,
}

impl From<CreateWishlistRequest> for NewWishlist {
    fn from(request: CreateWishlistRequest) -> Self {
        Self {
            title: request.title.trim().to_string(),
            items: normalize_items(request.items),
        }
    }
}

/// Partial update for the store
#[derive(Debug, Clone, Default)]
pub struct WishlistChanges {
    pub title: Option<String>,
    pub items: Option<Vec<WishlistItem>>,
}

impl From<UpdateWishlistRequest> for WishlistChanges {
    fn from(request: UpdateWishlistRequest) -> Self {
        Self {
            title: request.title.map(|t| t.trim().to_string()),
            items: request.items.map(normalize_items),
        }
    }
}
