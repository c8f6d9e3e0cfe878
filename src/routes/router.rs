/**
 * Router Configuration
 *
 * This module provides the main router creation function combining the
 * public routes, the auth-guarded story routes, the CORS layer, and the
 * 404 fallback.
 *
 * # CORS
 *
 * The layer is permissive (any origin, method, header), matching the
 * service's original deployment posture; restriction belongs to the
 * deployment, not the application.
 */

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::api_routes::{configure_public_routes, configure_story_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = configure_public_routes(Router::new());
    let router = router.merge(configure_story_routes(app_state.clone()));

    router
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .with_state(app_state)
}
