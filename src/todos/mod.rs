// Todos: single tasks with a completion flag

pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    routing::{get, put},
    Router,
};

pub use models::{CreateTodoRequest, NewTodo, Todo, TodoChanges, UpdateTodoRequest};
pub use repository::{PgTodoStore, TodoStore};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_todos_handler).post(handlers::create_todo_handler),
        )
        .route(
            "/:id",
            put(handlers::update_todo_handler).delete(handlers::delete_todo_handler),
        )
}
