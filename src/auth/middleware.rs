// Access-control gate for resource routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::auth::{error::AuthError, token::TokenService};

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
///
/// Handlers that take this extractor never run for unauthenticated
/// requests; the rejection is a uniform 401 regardless of whether the
/// token was missing, malformed, forged, or expired.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        // The verifier is built once at startup and injected via state
        let token_service = TokenService::from_ref(state);
        let claims = token_service.verify(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
        })
    }
}
