/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored hash
 * 3. Issue a session token
 *
 * # Security
 *
 * - A missing account, a wrong password, and a Google-only account with
 *   no password all collapse to the same 401 response, so the endpoint
 *   cannot be used to probe which usernames exist
 * - Password verification is constant-time (bcrypt)
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password, uniformly
/// * `500 Internal Server Error` - database or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&state.db, &request.username)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // A Google-only account has no hash; it fails the same way a wrong
    // password does.
    let valid = user
        .password_hash
        .as_deref()
        .map(|stored| verify_password(&request.password, stored))
        .unwrap_or(false);

    if !valid {
        tracing::warn!("Invalid credentials for user: {}", request.username);
        return Err(ApiError::Unauthorized);
    }

    let token = state.sessions.issue(&user.username).map_err(|e| {
        tracing::error!("Failed to issue token: {e:?}");
        ApiError::internal("token issuance failed")
    })?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(TokenResponse::bearer(token, user.username)))
}
