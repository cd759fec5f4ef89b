// Authentication module
// Registration, login, bearer-token verification, and the request gate
// that every resource route sits behind

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

use axum::{routing::post, Router};

pub use error::AuthError;
pub use middleware::AuthenticatedUser;
pub use models::{AuthPayload, LoginRequest, RegisterRequest, User, UserResponse};
pub use repository::{NewUser, PgUserStore, UserStore};
pub use service::AuthService;
pub use token::TokenService;

use crate::AppState;

/// Public routes: these are the only endpoints not behind the token gate
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register_handler))
        .route("/login", post(handlers::login_handler))
}
