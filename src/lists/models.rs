// Shopping list data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

fn default_quantity() -> i32 {
    1
}

/// One entry in a shopping list. Stored inside the owning list row, not
/// as a separate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListItem {
    #[validate(custom = "not_blank")]
    pub name: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// A titled collection of items owned by a single user
#[derive(Debug, Clone, Serialize)]
pub struct List {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub items: Vec<ListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a list; `items` defaults to empty
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateListRequest {
    #[validate(custom = "not_blank")]
    pub title: String,
    #[serde(default)]
    #[validate]
    pub items: Vec<ListItem>,
}

/// Request DTO for updating a list; `items`, when present, replaces the
/// whole collection
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateListRequest {
    #[validate(custom = "not_blank")]
    pub title: Option<String>,
    #[validate]
    pub items: Option<Vec<ListItem>>,
}

fn normalize_items(items: Vec<ListItem>) -> Vec<ListItem> {
    items
        .into_iter()
        .map(|item| ListItem {
            name: item.name.trim().to_string(),
            ..item
        })
        .collect()
}

/// Validated, normalized input for the store
#[derive(Debug, Clone)]
pub struct NewList {
    pub title: String,
    pub items: Vec<ListItem>,
}

impl From<CreateListRequest> for NewList {
    fn from(request: CreateListRequest) -> Self {
        Self {
            title: request.title.trim().to_string(),
            items: normalize_items(request.items),
        }
    }
}

/// Partial update for the store
#[derive(Debug, Clone, Default)]
pub struct ListChanges {
    pub title: Option<String>,
    pub items: Option<Vec<ListItem>>,
}

impl From<UpdateListRequest> for ListChanges {
    fn from(request: UpdateListRequest) -> Self {
        Self {
            title: request.title.map(|t| t.trim().to_string()),
            items: request.items.map(normalize_items),
        }
    }
}
