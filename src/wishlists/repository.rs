// Wishlist store: owner-scoped persistence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;
use crate::wishlists::models::{NewWishlist, Wishlist, WishlistChanges, WishlistItem};

/// Backing store for wishlists. Joint `{id, user_id}` filtering
/// throughout; cross-owner access is indistinguishable from a missing id.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    async fn list(&self, user_id: i32) -> Result<Vec<Wishlist>, ApiError>;

    async fn create(&self, user_id: i32, new: NewWishlist) -> Result<Wishlist, ApiError>;

    async fn update(
        &self,
        user_id: i32,
        id: i32,
        changes: WishlistChanges,
    ) -> Result<Option<Wishlist>, ApiError>;

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError>;
}

/// Row shape with items still packed as JSONB
#[derive(FromRow)]
struct WishlistRow {
    id: i32,
    user_id: i32,
    title: String,
    items: Json<Vec<WishlistItem>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WishlistRow> for Wishlist {
    fn from(row: WishlistRow) -> Self {
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

/// PostgreSQL-backed wishlist store
#[derive(Clone)]
pub struct PgWishlistStore {
    pool: PgPool,
}

impl PgWishlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistStore for PgWishlistStore {
    async fn list(&self, user_id: i32) -> Result<Vec<Wishlist>, ApiError> {
        let rows = sqlx::query_as::<_, WishlistRow>(
            r#"
            SELECT id, user_id, title, items, created_at, updated_at
            FROM wishlists
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Wishlist::from).collect())
    }

    async fn create(&self, user_id: i32, new: NewWishlist) -> Result<Wishlist, ApiError> {
        let row = sqlx::query_as::<_, WishlistRow>(
            r#"
            INSERT INTO wishlists (user_id, title, items)
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
        changes: WishlistChanges,
    ) -> Result<Option<Wishlist>, ApiError> {
        let row = sqlx::query_as::<_, WishlistRow>(
            r#"
            UPDATE wishlists
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

        Ok(row.map(Wishlist::from))
    }

    async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory wishlist store for tests

    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryWishlistStore {
        wishlists: Mutex<Vec<Wishlist>>,
        next_id: AtomicI32,
    }

    impl InMemoryWishlistStore {
        pub fn new() -> Self {
            Self {
                wishlists: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl WishlistStore for InMemoryWishlistStore {
        async fn list(&self, user_id: i32) -> Result<Vec<Wishlist>, ApiError> {
            let wishlists = self.wishlists.lock().unwrap();
            let mut owned: Vec<Wishlist> = wishlists
                .iter()
                .filter(|w| w.user_id == user_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            Ok(owned)
        }

        async fn create(&self, user_id: i32, new: NewWishlist) -> Result<Wishlist, ApiError> {
            let now = Utc::now();
            let wishlist = Wishlist {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id,
                title: new.title,
                items: new.items,
                created_at: now,
                updated_at: now,
            };
            self.wishlists.lock().unwrap().push(wishlist.clone());
            Ok(wishlist)
        }

        async fn update(
            &self,
            user_id: i32,
            id: i32,
            changes: WishlistChanges,
        ) -> Result<Option<Wishlist>, ApiError> {
            let mut wishlists = self.wishlists.lock().unwrap();
            let wishlist = wishlists
                .iter_mut()
                .find(|w| w.id == id && w.user_id == user_id);

            Ok(wishlist.map(|w| {
                if let Some(title) = changes.title {
                    w.title = title;
                }
                if let Some(items) = changes.items {
                    w.items = items;
                }
                w.updated_at = Utc::now();
                w.clone()
            }))
        }

        async fn delete(&self, user_id: i32, id: i32) -> Result<bool, ApiError> {
            let mut wishlists = self.wishlists.lock().unwrap();
            let before = wishlists.len();
            wishlists.retain(|w| !(w.id == id && w.user_id == user_id));
            Ok(wishlists.len() < before)
        }
    }
}
