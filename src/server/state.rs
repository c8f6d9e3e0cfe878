/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central container for the constructed services:
 *
 * - Database connection pool
 * - Session token signer
 * - Google identity verifier
 * - Welcome notifier
 * - Generation client
 *
 * Everything is built once in `server::init` and injected here; there
 * is no ambient global state. All fields are cheaply cloneable and
 * thread-safe, and no request handler holds a lock across an await.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract exactly the
 * service they use (`State<PgPool>`, `State<GenerationClient>`, ...)
 * without taking the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::google::GoogleVerifier;
use crate::auth::sessions::SessionSigner;
use crate::generation::client::GenerationClient;
use crate::notify::WelcomeNotifier;

/// Application state holding all constructed services
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Session token signer
    pub sessions: SessionSigner,
    /// Google identity verifier
    pub google: GoogleVerifier,
    /// Welcome notification sender
    pub notifier: WelcomeNotifier,
    /// Text generation client
    pub generation: GenerationClient,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for SessionSigner {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for GoogleVerifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.google.clone()
    }
}

impl FromRef<AppState> for WelcomeNotifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notifier.clone()
    }
}

impl FromRef<AppState> for GenerationClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.generation.clone()
    }
}
