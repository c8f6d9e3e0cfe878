/**
 * Story Handlers
 *
 * HTTP handlers for the story CRUD endpoints. All routes here sit
 * behind the authentication middleware; handlers receive the resolved
 * caller through the `AuthUser` extractor and pass it straight into the
 * owner-scoped storage operations.
 *
 * # Routes
 *
 * - `POST /stories/save` - Create a story
 * - `GET /stories/my` - List the caller's stories
 * - `PUT /stories/update/{id}` - Update a story the caller owns
 * - `DELETE /stories/delete/{id}` - Delete a story the caller owns
 *
 * Update and delete report 404 when zero rows were affected, whether
 * the id does not exist or belongs to another user.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::handlers::types::MessageResponse;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::stories::db::{delete_story, insert_story, list_stories, update_story, Story};

/// Story create/update payload
#[derive(Deserialize, Serialize, Debug)]
pub struct StoryPayload {
    /// Story title
    pub title: String,
    /// Story text
    pub body: String,
    /// Story category
    pub category: String,
}

/// Story list response
#[derive(Serialize, Deserialize, Debug)]
pub struct StoriesResponse {
    /// The caller's stories, newest first
    pub stories: Vec<Story>,
}

/// Save a new story for the caller
pub async fn save_story(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(payload): Json<StoryPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let story = insert_story(
        &pool,
        &user.identifier,
        &payload.title,
        &payload.body,
        &payload.category,
    )
    .await?;

    tracing::info!("Story {} saved for {}", story.id, user.identifier);

    Ok(Json(MessageResponse::new("Story saved!")))
}

/// List the caller's stories
///
/// The owner filter lives in the query; another user's stories are
/// never fetched, let alone returned.
pub async fn my_stories(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<StoriesResponse>, ApiError> {
    let stories = list_stories(&pool, &user.identifier).await?;

    Ok(Json(StoriesResponse { stories }))
}

/// Update a story the caller owns
///
/// # Errors
///
/// * `404 Not Found` - no story with this id is owned by the caller
pub async fn update_story_handler(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<StoryPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = update_story(
        &pool,
        id,
        &user.identifier,
        &payload.title,
        &payload.body,
        &payload.category,
    )
    .await?;

    if !updated {
        return Err(ApiError::not_found("Story not found"));
    }

    tracing::info!("Story {} updated by {}", id, user.identifier);

    Ok(Json(MessageResponse::new("Story updated!")))
}

/// Delete a story the caller owns
///
/// # Errors
///
/// * `404 Not Found` - no story with this id is owned by the caller
pub async fn delete_story_handler(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = delete_story(&pool, id, &user.identifier).await?;

    if !deleted {
        return Err(ApiError::not_found("Story not found"));
    }

    tracing::info!("Story {} deleted by {}", id, user.identifier);

    Ok(Json(MessageResponse::new("Story deleted!")))
}
