// Shopping lists: titled collections of priced items

pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    routing::{get, put},
    Router,
};

pub use models::{CreateListRequest, List, ListChanges, ListItem, NewList, UpdateListRequest};
pub use repository::{ListStore, PgListStore};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_lists_handler).post(handlers::create_list_handler),
        )
        .route(
            "/:id",
            put(handlers::update_list_handler).delete(handlers::delete_list_handler),
        )
}
