// Todo store: owner-scoped persistence

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::todos::models::{NewTodo, Todo, TodoChanges};

/// Backing store for todos. Same ownership contract as the other stores:
/// joint `{id, user_id}` filtering, cross-owner access indistinguishable
/// from a missing id.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self, user_id: i32) -> Result<Vec<Todo>, ApiError>;

    async fn create(&self, user_id: i32, new: NewTodo) -> Result<Todo, ApiError>;

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, ApiError>;

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError>;
}

/// PostgreSQL-backed todo store
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self, user_id: i32) -> Result<Vec<Todo>, ApiError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, task, completed, created_at, updated_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn create(&self, user_id: i32, new: NewTodo) -> Result<Todo, ApiError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (user_id, task, completed)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, task, completed, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&new.task)
        .bind(new.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, ApiError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET task = COALESCE($3, task),
                completed = COALESCE($4, completed),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, task, completed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.task)
        .bind(changes.completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory todo store for tests

    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryTodoStore {
        todos: Mutex<Vec<Todo>>,
        next_id: AtomicI32,
    }

    impl InMemoryTodoStore {
        pub fn new() -> Self {
            Self {
                todos: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl TodoStore for InMemoryTodoStore {
        async fn list(&self, user_id: i32) -> Result<Vec<Todo>, ApiError> {
            let todos = self.todos.lock().unwrap();
            let mut owned: Vec<Todo> = todos
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            Ok(owned)
        }

        async fn create(&self, user_id: i32, new: NewTodo) -> Result<Todo, ApiError> {
            let now = Utc::now();
            let todo = Todo {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id,
                task: new.task,
                completed: new.completed,
                created_at: now,
                updated_at: now,
            };
            self.todos.lock().unwrap().push(todo.clone());
            Ok(todo)
        }

        async fn update(
            &self,
            user_id: i32,
            id: i32,
            changes: TodoChanges,
        ) -> Result<Option<Todo>, ApiError> {
            let mut todos = self.todos.lock().unwrap();
            let todo = todos
                .iter_mut()
                .find(|t| t.id == id && t.user_id == user_id);

            Ok(todo.map(|t| {
                if let Some(task) = changes.task {
                    t.task = task;
                }
                if let Some(completed) = changes.completed {
                    t.completed = completed;
                }
                t.updated_at = Utc::now();
                t.clone()
            }))
        }

        async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
            let mut todos = self.todos.lock().unwrap();
            let before = todos.len();
            todos.retain(|t| !(t.id == id && t.user_id == user_id));
            Ok(todos.len() < before)
        }
    }
}
