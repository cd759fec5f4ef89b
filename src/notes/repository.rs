// Note store: owner-scoped persistence

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::notes::models::{NewNote, Note, NoteChanges};

/// Backing store for notes.
///
/// Every read and mutation filters by `{id, user_id}` jointly; an id that
/// exists under a different owner behaves exactly like one that does not
/// exist (`None` / `false`).
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes owned by the user, newest-created first
    async fn list(&self, user_id: i32) -> Result<Vec<Note>, ApiError>;

    async fn create(&self, user_id: i32, new: NewNote) -> Result<Note, ApiError>;

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: NoteChanges,
    ) -> Result<Option<Note>, ApiError>;

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError>;
}

/// PostgreSQL-backed note store
#[derive(Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list(&self, user_id: i32) -> Result<Vec<Note>, ApiError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, steps, created_at, updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn create(&self, user_id: i32, new: NewNote) -> Result<Note, ApiError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, title, content, steps)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, content, steps, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.steps)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: NoteChanges,
    ) -> Result<Option<Note>, ApiError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                steps = COALESCE($5, steps),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, steps, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.title)
        .bind(changes.content)
        .bind(changes.steps)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory note store for tests

    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryNoteStore {
        notes: Mutex<Vec<Note>>,
        next_id: AtomicI32,
    }

    impl InMemoryNoteStore {
        pub fn new() -> Self {
            Self {
                notes: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl NoteStore for InMemoryNoteStore {
        async fn list(&self, user_id: i32) -> Result<Vec<Note>, ApiError> {
            let notes = self.notes.lock().unwrap();
            let mut owned: Vec<Note> = notes
                .iter()
                .filter(|n| n.user_id == user_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            Ok(owned)
        }

        async fn create(&self, user_id: i32, new: NewNote) -> Result<Note, ApiError> {
            let now = Utc::now();
            let note = Note {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id,
                title: new.title,
                content: new.content,
                steps: new.steps,
                created_at: now,
                updated_at: now,
            };
            self.notes.lock().unwrap().push(note.clone());
            Ok(note)
        }

        async fn update(
            &self,
            user_id: i32,
            id: i32,
            changes: NoteChanges,
        ) -> Result<Option<Note>, ApiError> {
            let mut notes = self.notes.lock().unwrap();
            let note = notes
                .iter_mut()
                .find(|n| n.id == id && n.user_id == user_id);

            Ok(note.map(|n| {
                if let Some(title) = changes.title {
                    n.title = title;
                }
                if let Some(content) = changes.content {
                    n.content = content;
                }
                if let Some(steps) = changes.steps {
                    n.steps = steps;
                }
                n.updated_at = Utc::now();
                n.clone()
            }))
        }

        async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
            let mut notes = self.notes.lock().unwrap();
            let before = notes.len();
            notes.retain(|n| !(n.id == id && n.user_id == user_id));
            Ok(notes.len() < before)
        }
    }
}
