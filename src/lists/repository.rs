// Shopping list store: owner-scoped persistence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;
use crate::lists::models::{List, ListChanges, ListItem, NewList};

/// Backing store for shopping lists. Joint `{id, user_id}` filtering
/// throughout; cross-owner access is indistinguishable from a missing id.
#[async_trait]
pub trait ListStore: Send + Sync {
    async fn list(&self, user_id: i32) -> Result<Vec<List>, ApiError>;

    async fn create(&self, user_id: i32, new: NewList) -> Result<List, ApiError>;

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: ListChanges,
    ) -> Result<Option<List>, ApiError>;

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError>;
}

/// Row shape with items still packed as JSONB
#[derive(FromRow)]
struct ListRow {
    id: i32,
    user_id: i32,
    title: String,
    items: Json<Vec<ListItem>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            items: row.items.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed list store
#[derive(Clone)]
pub struct PgListStore {
    pool: PgPool,
}

impl PgListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn list(&self, user_id: i32) -> Result<Vec<List>, ApiError> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT id, user_id, title, items, created_at, updated_at
            FROM lists
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(List::from).collect())
    }

    async fn create(&self, user_id: i32, new: NewList) -> Result<List, ApiError> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            INSERT INTO lists (user_id, title, items)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, items, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&new.title)
        .bind(Json(&new.items))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: ListChanges,
    ) -> Result<Option<List>, ApiError> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            UPDATE lists
            SET title = COALESCE($3, title),
                items = COALESCE($4, items),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, items, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.title)
        .bind(changes.items.map(Json))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(List::from))
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory list store for tests

    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryListStore {
        lists: Mutex<Vec<List>>,
        next_id: AtomicI32,
    }

    impl InMemoryListStore {
        pub fn new() -> Self {
            Self {
                lists: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl ListStore for InMemoryListStore {
        async fn list(&self, user_id: i32) -> Result<Vec<List>, ApiError> {
            let lists = self.lists.lock().unwrap();
            let mut owned: Vec<List> = lists
                .iter()
                .filter(|l| l.user_id == user_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            Ok(owned)
        }

        async fn create(&self, user_id: i32, new: NewList) -> Result<List, ApiError> {
            let now = Utc::now();
            let list = List {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id,
                title: new.title,
                items: new.items,
                created_at: now,
                updated_at: now,
            };
            self.lists.lock().unwrap().push(list.clone());
            Ok(list)
        }

        async fn update(
            &self,
            user_id: i32,
            id: i32,
            changes: ListChanges,
        ) -> Result<Option<List>, ApiError> {
            let mut lists = self.lists.lock().unwrap();
            let list = lists
                .iter_mut()
                .find(|l| l.id == id && l.user_id == user_id);

            Ok(list.map(|l| {
                if let Some(title) = changes.title {
                    l.title = title;
                }
                if let Some(items) = changes.items {
                    l.items = items;
                }
                l.updated_at = Utc::now();
                l.clone()
            }))
        }

        async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
            let mut lists = self.lists.lock().unwrap();
            let before = lists.len();
            lists.retain(|l| !(l.id == id && l.user_id == user_id));
            Ok(lists.len() < before)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryListStore;
    use super::*;

    fn item(name: &str, quantity: i32, price: f64) -> ListItem {
        ListItem {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_items() {
        let store = InMemoryListStore::new();

        let list = store
            .create(
                1,
                NewList {
                    title: "groceries".to_string(),
                    items: vec![item("milk", 2, 1.5), item("bread", 1, 0.0)],
                },
            )
            .await
            .unwrap();

        assert_eq!(list.title, "groceries");
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0], item("milk", 2, 1.5));
    }

    #[tokio::test]
    async fn test_update_replaces_items_wholesale() {
        let store = InMemoryListStore::new();
        let list = store
            .create(
                1,
                NewList {
                    title: "groceries".to_string(),
                    items: vec![item("milk", 1, 1.5)],
                },
            )
            .await
            .unwrap();

        let updated = store
            .update(
                1,
                list.id,
                ListChanges {
                    items: Some(vec![item("eggs", 12, 3.0)]),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "groceries");
        assert_eq!(updated.items, vec![item("eggs", 12, 3.0)]);
    }

    #[tokio::test]
    async fn test_cross_owner_access_is_not_found() {
        let store = InMemoryListStore::new();
        let list = store
            .create(
                1,
                NewList {
                    title: "mine".to_string(),
                    items: Vec::new(),
                },
            )
            .await
            .unwrap();

        assert!(store
            .update(2, list.id, ListChanges::default())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete(2, list.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_item_defaults_applied_on_deserialization() {
        // quantity defaults to 1 and price to 0 when the client omits them
        let item: ListItem = serde_json::from_str(r#"{"name": "milk"}"#).unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, 0.0);
    }
}
