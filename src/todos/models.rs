// Todo data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validation::not_blank;

/// A single task with a completion flag
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub user_id: i32,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a todo; `completed` defaults to false
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    #[validate(custom = "not_blank")]
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request DTO for updating a todo; omitted fields keep stored values
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    #[validate(custom = "not_blank")]
    pub task: Option<String>,
    pub completed: Option<bool>,
}

/// Validated, normalized input for the store
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(request: CreateTodoRequest) -> Self {
        Self {
            task: request.task.trim().to_string(),
            completed: request.completed,
        }
    }
}

/// Partial update for the store
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoChanges {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            task: request.task.map(|t| t.trim().to_string()),
            completed: request.completed,
        }
    }
}
