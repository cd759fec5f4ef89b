// Wishlists: priced items with a bought flag

pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    routing::{get, put},
    Router,
};

pub use models::{
    CreateWishlistRequest, NewWishlist, UpdateWishlistRequest, Wishlist, WishlistChanges,
    WishlistItem,
};
pub use repository::{PgWishlistStore, WishlistStore};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_wishlists_handler).post(handlers::create_wishlist_handler),
        )
        .route(
            "/:id",
            put(handlers::update_wishlist_handler).delete(handlers::delete_wishlist_handler),
        )
}
