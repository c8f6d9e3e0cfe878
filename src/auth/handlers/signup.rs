/**
 * Signup Handler
 *
 * This module implements the account registration handler for
 * POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate that both fields are present
 * 2. Hash the password
 * 3. Insert the user; the UNIQUE constraint on username is the only
 *    existence check
 * 4. Return an acknowledgment
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never logged
 * - A duplicate username is reported as 409 Conflict; unlike login,
 *   signup legitimately reveals existence, otherwise duplicate accounts
 *   could not be prevented
 * - No token is returned: registration does not log the user in
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::auth::password::{hash_password, PasswordError};
use crate::auth::users::{create_local_user, is_unique_violation};
use crate::error::ApiError;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - empty username or password, or over-long password
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or database failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::invalid_input(
            "Username and password are required",
        ));
    }

    let password_hash = hash_password(&request.password).map_err(|e| match e {
        PasswordError::TooLong => ApiError::invalid_input(e.to_string()),
        PasswordError::Hash(e) => {
            tracing::error!("Failed to hash password: {e:?}");
            ApiError::internal("password hashing failed")
        }
    })?;

    // Single INSERT; the unique constraint arbitrates concurrent signups.
    let user = create_local_user(&pool, &request.username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Username already exists: {}", request.username);
                ApiError::conflict("User already exists")
            } else {
                tracing::error!("Failed to create user: {e:?}");
                ApiError::Database(e)
            }
        })?;

    tracing::info!("User created successfully: {}", user.username);

    Ok(Json(MessageResponse::new("Account created!")))
}
