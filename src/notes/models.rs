// Note data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validation::not_blank;

/// A note owned by a single user. `steps` is an ordered list of free-text
/// steps, empty for plain notes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a note
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    #[validate(custom = "not_blank")]
    pub title: String,
    #[validate(custom = "not_blank")]
    pub content: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Request DTO for updating a note; omitted fields keep stored values
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateNoteRequest {
    #[validate(custom = "not_blank")]
    pub title: Option<String>,
    #[validate(custom = "not_blank")]
    pub content: Option<String>,
    pub steps: Option<Vec<String>>,
}

/// Validated, normalized input for the store
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub steps: Vec<String>,
}

impl From<CreateNoteRequest> for NewNote {
    fn from(request: CreateNoteRequest) -> Self {
        Self {
            title: request.title.trim().to_string(),
            content: request.content.trim().to_string(),
            steps: request.steps,
        }
    }
}

/// Partial update for the store; `None` means "keep the stored value"
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub steps: Option<Vec<String>>,
}

impl From<UpdateNoteRequest> for NoteChanges {
    fn from(request: UpdateNoteRequest) -> Self {
        Self {
            title: request.title.map(|t| t.trim().to_string()),
            content: request.content.map(|c| c.trim().to_string()),
            steps: request.steps,
        }
    }
}
