// Notes: titled free-text entries with an optional ordered step list

pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    routing::{get, put},
    Router,
};

pub use models::{CreateNoteRequest, NewNote, Note, NoteChanges, UpdateNoteRequest};
pub use repository::{NoteStore, PgNoteStore};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_notes_handler).post(handlers::create_note_handler),
        )
        .route(
            "/:id",
            put(handlers::update_note_handler).delete(handlers::delete_note_handler),
        )
}
