//! Database operations for stories
//!
//! Every operation here is scoped by owner inside the SQL predicate
//! itself. Update and delete are single filtered statements reporting
//! an affected-row count; there is no fetch-then-compare anywhere, so a
//! well-formed id belonging to another user can never be read or
//! destroyed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A user-owned story
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Story {
    /// Unique story ID (UUID)
    pub id: Uuid,
    /// Owning username; set at creation, never reassigned
    pub owner: String,
    /// Story title
    pub title: String,
    /// Story text
    pub body: String,
    /// Story category (e.g. "Adventure", "Horror")
    pub category: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp, set on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Insert a new story for an owner
pub async fn insert_story(
    pool: &PgPool,
    owner: &str,
    title: &str,
    body: &str,
    category: &str,
) -> Result<Story, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Story>(
        r#"
        INSERT INTO stories (id, owner, title, body, category, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, owner, title, body, category, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(title)
    .bind(body)
    .bind(category)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List an owner's stories, newest first
pub async fn list_stories(pool: &PgPool, owner: &str) -> Result<Vec<Story>, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        r#"
        SELECT id, owner, title, body, category, created_at, updated_at
        FROM stories
        WHERE owner = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Update a story, scoped by `(id, owner)`
///
/// Returns whether a row was affected. False covers both "no such id"
/// and "owned by someone else"; callers must not distinguish them.
pub async fn update_story(
    pool: &PgPool,
    id: Uuid,
    owner: &str,
    title: &str,
    body: &str,
    category: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE stories
        SET title = $1, body = $2, category = $3, updated_at = $4
        WHERE id = $5 AND owner = $6
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(category)
    .bind(Utc::now())
    .bind(id)
    .bind(owner)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a story, scoped by `(id, owner)`
///
/// Same affected-row contract as [`update_story`].
pub async fn delete_story(pool: &PgPool, id: Uuid, owner: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM stories
        WHERE id = $1 AND owner = $2
        "#,
    )
    .bind(id)
    .bind(owner)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
