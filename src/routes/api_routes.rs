/**
 * API Route Handlers
 *
 * This module declares the endpoint-to-handler mapping.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /signup` - Account registration
 * - `POST /login` - Password login
 * - `POST /google-login` - Google federated login
 *
 * ## Stories (bearer token required)
 * - `POST /stories/save` - Create a story
 * - `GET /stories/my` - List the caller's stories
 * - `PUT /stories/update/{id}` - Update an owned story
 * - `DELETE /stories/delete/{id}` - Delete an owned story
 *
 * ## Generation (public)
 * - `POST /generate` - Generate story text
 */

use axum::{middleware, Router};

use crate::auth::{google_login, login, signup};
use crate::generation::generate;
use crate::middleware::require_auth;
use crate::server::state::AppState;
use crate::stories::{delete_story_handler, my_stories, save_story, update_story_handler};

/// Configure the public API routes
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", axum::routing::post(signup))
        .route("/login", axum::routing::post(login))
        .route("/google-login", axum::routing::post(google_login))
        .route("/generate", axum::routing::post(generate))
}

/// Configure the story routes behind the auth middleware
///
/// The middleware resolves the caller from the bearer token before any
/// handler or storage work; every handler then scopes its queries to
/// that caller.
pub fn configure_story_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stories/save", axum::routing::post(save_story))
        .route("/stories/my", axum::routing::get(my_stories))
        .route("/stories/update/{id}", axum::routing::put(update_story_handler))
        .route(
            "/stories/delete/{id}",
            axum::routing::delete(delete_story_handler),
        )
        .route_layer(middleware::from_fn_with_state(app_state, require_auth))
}
