/**
 * User Model and Database Operations
 *
 * This module defines the identity record and its database operations.
 * A user row is local (password hash set), Google-linked (Google
 * subject id set), or both after a one-time linkage.
 *
 * Username uniqueness is enforced by the UNIQUE constraint on the
 * `users` table; callers insert and map the violation rather than
 * checking first.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing an identity in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique; the Google email for federated accounts)
    pub username: String,
    /// Hashed password (bcrypt); None for Google-only accounts
    pub password_hash: Option<String>,
    /// Google subject id; None for local-only accounts
    pub google_id: Option<String>,
    /// Display name from the Google profile
    pub display_name: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new local (password) user
///
/// # Errors
///
/// A unique violation on `username` surfaces as `sqlx::Error::Database`;
/// the caller maps it to a conflict.
pub async fn create_local_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, google_id, display_name, created_at, updated_at)
        VALUES ($1, $2, $3, NULL, NULL, $4, $5)
        RETURNING id, username, password_hash, google_id, display_name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Create a new Google-linked user (implicit signup, no password)
pub async fn create_google_user(
    pool: &PgPool,
    email: &str,
    google_id: &str,
    display_name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, google_id, display_name, created_at, updated_at)
        VALUES ($1, $2, NULL, $3, $4, $5, $6)
        RETURNING id, username, password_hash, google_id, display_name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(google_id)
    .bind(display_name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a user by username
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, google_id, display_name, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get a user by Google subject id
pub async fn get_user_by_google_id(
    pool: &PgPool,
    google_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, google_id, display_name, created_at, updated_at
        FROM users
        WHERE google_id = $1
        "#,
    )
    .bind(google_id)
    .fetch_optional(pool)
    .await
}

/// Link a Google identity onto an existing username row
///
/// One-time linkage: sets the subject id and fills the display name if
/// it was empty. Returns the updated user, or None when no row matched.
pub async fn link_google_identity(
    pool: &PgPool,
    username: &str,
    google_id: &str,
    display_name: &str,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET google_id = $1,
            display_name = COALESCE(display_name, $2),
            updated_at = $3
        WHERE username = $4
        RETURNING id, username, password_hash, google_id, display_name, created_at, updated_at
        "#,
    )
    .bind(google_id)
    .bind(display_name)
    .bind(now)
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// True when the error is a unique-constraint violation
///
/// Used to map concurrent or duplicate inserts to `Conflict` without a
/// read-then-write race.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
