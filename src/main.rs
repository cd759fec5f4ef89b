mod auth;
mod db;
mod error;
mod extract;
mod response;
mod validation;

mod lists;
mod notes;
mod todos;
mod wishlists;

use std::sync::Arc;

use axum::{extract::FromRef, response::Json, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use auth::{AuthService, PgUserStore, TokenService};
use lists::{ListStore, PgListStore};
use notes::{NoteStore, PgNoteStore};
use response::ApiResponse;
use todos::{PgTodoStore, TodoStore};
use wishlists::{PgWishlistStore, WishlistStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub token_service: TokenService,
    pub notes: Arc<dyn NoteStore>,
    pub todos: Arc<dyn TodoStore>,
    pub lists: Arc<dyn ListStore>,
    pub wishlists: Arc<dyn WishlistStore>,
}

// Lets the token extractor pull its service straight out of router state
impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}

/// Handler for GET /
/// Liveness probe, no authentication required
async fn health_handler() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Productivity API is running"))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler))
        .nest("/api/auth", auth::routes())
        .nest("/api/notes", notes::routes())
        .nest("/api/todos", todos::routes())
        .nest("/api/lists", lists::routes())
        .nest("/api/wishlists", wishlists::routes())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Productivity API - Starting...");

    // Get configuration from environment variables
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    // Startup-fatal on a missing secret: a server without one would mint
    // unverifiable tokens
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let token_service = TokenService::new(jwt_secret);
    let state = AppState {
        auth: Arc::new(AuthService::new(
            Arc::new(PgUserStore::new(db_pool.clone())),
            token_service.clone(),
        )),
        token_service,
        notes: Arc::new(PgNoteStore::new(db_pool.clone())),
        todos: Arc::new(PgTodoStore::new(db_pool.clone())),
        lists: Arc::new(PgListStore::new(db_pool.clone())),
        wishlists: Arc::new(PgWishlistStore::new(db_pool)),
    };

    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Productivity API is running on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
