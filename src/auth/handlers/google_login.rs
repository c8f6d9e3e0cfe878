/**
 * Google Login Handler
 *
 * This module implements the federated login handler for
 * POST /google-login.
 *
 * # Login Process
 *
 * 1. Verify the posted ID token against Google's public keys
 * 2. Resolve the identity by Google subject id
 * 3. If unknown: link onto an existing account whose username is the
 *    Google email (one-time linkage), or create a new account -- an
 *    implicit signup with no password
 * 4. On first-time creation only, fire the welcome notification without
 *    waiting for it
 * 5. Issue a session token for the resolved username
 *
 * # Notification
 *
 * The welcome notification is fire-and-forget: it runs on its own task,
 * failures are logged and swallowed, and the login response never waits
 * on it.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::google::GoogleIdentity;
use crate::auth::handlers::types::{GoogleLoginRequest, TokenResponse};
use crate::auth::users::{
    create_google_user, get_user_by_google_id, is_unique_violation, link_google_identity, User,
};
use crate::error::ApiError;
use crate::notify::WelcomeNotifier;
use crate::server::state::AppState;

/// Google login handler
///
/// # Errors
///
/// * `400 Bad Request` - the assertion failed verification; the
///   rejection reason is surfaced, verifier internals are not
/// * `500 Internal Server Error` - database or token issuance failure
pub async fn google_login(
    State(state): State<AppState>,
    Json(request): Json<GoogleLoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = state.google.verify(&request.credential).await.map_err(|e| {
        tracing::warn!("Google assertion rejected: {e}");
        ApiError::invalid_input(e.to_string())
    })?;

    tracing::info!("Google login for: {}", identity.email);

    let user = resolve_identity(&state.db, &identity, &state.notifier).await?;

    let token = state.sessions.issue(&user.username).map_err(|e| {
        tracing::error!("Failed to issue token: {e:?}");
        ApiError::internal("token issuance failed")
    })?;

    Ok(Json(TokenResponse::bearer(token, user.username)))
}

/// Resolve a verified Google identity to a user record
///
/// Creates the user on first login (spawning the welcome notification
/// exactly once), or links the Google id onto an existing local account
/// with the same email-as-username.
async fn resolve_identity(
    pool: &PgPool,
    identity: &GoogleIdentity,
    notifier: &WelcomeNotifier,
) -> Result<User, ApiError> {
    if let Some(user) = get_user_by_google_id(pool, &identity.subject).await? {
        return Ok(user);
    }

    // A local account may already hold this email as its username; the
    // one-time linkage adds the Google fields without creating a row.
    if let Some(user) =
        link_google_identity(pool, &identity.email, &identity.subject, &identity.name).await?
    {
        tracing::info!("Linked Google identity to existing user: {}", user.username);
        return Ok(user);
    }

    match create_google_user(pool, &identity.email, &identity.subject, &identity.name).await {
        Ok(user) => {
            tracing::info!("Created user via Google login: {}", user.username);
            spawn_welcome(notifier.clone(), identity.email.clone(), identity.name.clone());
            Ok(user)
        }
        // Lost a creation race; the row now exists, resolve it again.
        Err(e) if is_unique_violation(&e) => get_user_by_google_id(pool, &identity.subject)
            .await?
            .ok_or_else(|| ApiError::internal("user vanished after concurrent creation")),
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Fire the welcome notification on its own task
fn spawn_welcome(notifier: WelcomeNotifier, email: String, name: String) {
    tokio::spawn(async move {
        if !notifier.send_welcome(&email, &name).await {
            tracing::warn!("Welcome notification failed for {email}");
        }
    });
}
