/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in caller. It
 * extracts the bearer token from the Authorization header, verifies it
 * with the session signer, and attaches the resolved identity to the
 * request for handlers to consume.
 *
 * Resolution is token-only: no storage is touched before the handler
 * runs, and a missing or invalid token short-circuits with the uniform
 * 401 before any handler work.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// The username the token was issued for
    pub identifier: String,
}

/// Authentication middleware
///
/// 1. Extracts the token from the `Authorization: Bearer` header
/// 2. Verifies it with the session signer
/// 3. Attaches the resolved identity to request extensions
///
/// Returns the uniform 401 if the token is missing, malformed, expired,
/// or tampered with.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let identifier = state.sessions.verify(token).map_err(|_| {
        tracing::warn!("Token verification failed");
        ApiError::Unauthorized
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { identifier });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Usable as a handler parameter on any route behind `require_auth`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
