// Authentication service - registration and login flows

use std::sync::Arc;

use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{AuthPayload, LoginRequest, RegisterRequest},
    password::PasswordService,
    repository::{NewUser, UserStore},
    token::TokenService,
};

/// Coordinates the credential store, password hashing, and token issuance
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and issue their first token
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthPayload, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Emails are stored trimmed and lowercased; uniqueness is
        // case-insensitive either way
        let email = request.email.trim().to_lowercase();

        if self.users.email_exists(&email).await? {
            tracing::debug!("Registration rejected, email already in use");
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = PasswordService::hash(&request.password)?;

        let user = self
            .users
            .create(NewUser {
                name: request.name.trim().to_string(),
                email,
                password_hash,
            })
            .await?;

        tracing::info!("User registered: id={}", user.id);

        let token = self.tokens.issue(user.id)?;
        Ok(AuthPayload {
            token,
            user: user.into(),
        })
    }

    /// Verify credentials and issue a fresh token.
    ///
    /// Unknown email and wrong password take different paths here but
    /// return the identical error, so callers cannot enumerate accounts.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthPayload, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let user = self
            .users
            .find_by_email(request.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!("User logged in: id={}", user.id);

        let token = self.tokens.issue(user.id)?;
        Ok(AuthPayload {
            token,
            user: user.into(),
        })
    }
}
