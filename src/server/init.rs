/**
 * Server Initialization
 *
 * This module assembles the application: it connects the store, builds
 * each service from configuration, and wires the router.
 *
 * # Initialization Process
 *
 * 1. Connect the database pool and run migrations (fatal on failure)
 * 2. Construct the session signer from the configured secret and TTL
 * 3. Construct the Google verifier, notifier, and generation client
 * 4. Build the router around the assembled `AppState`
 */

use axum::Router;

use crate::auth::google::GoogleVerifier;
use crate::auth::sessions::SessionSigner;
use crate::generation::client::GenerationClient;
use crate::notify::{ResendNotifier, SmtpNotifier, WelcomeNotifier};
use crate::routes::router::create_router;
use crate::server::config::{connect_database, AppConfig, ConfigError, NotifierSettings};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is unreachable or migrations cannot run; a
/// service without its store has no useful surface.
pub async fn create_app(config: &AppConfig) -> Result<Router, ConfigError> {
    tracing::info!("Initializing Penscribe backend server");

    let db = connect_database(&config.database_url).await?;

    let sessions = SessionSigner::new(&config.secret_key, config.session_ttl);

    let google = GoogleVerifier::new(
        config.google_client_id.clone().unwrap_or_default(),
        reqwest::Client::new(),
    );

    let notifier = build_notifier(&config.notifier);
    let generation = GenerationClient::new(config.generation_api_key.clone());

    let app_state = AppState {
        db,
        sessions,
        google,
        notifier,
        generation,
    };

    tracing::info!("Services initialized; configuring router");

    Ok(create_router(app_state))
}

/// Construct the configured notification backend
fn build_notifier(settings: &NotifierSettings) -> WelcomeNotifier {
    match settings {
        NotifierSettings::Resend { api_key, from } => {
            tracing::info!("Welcome notifications via Resend");
            WelcomeNotifier::Resend(ResendNotifier::new(api_key.clone(), from.clone()))
        }
        NotifierSettings::Smtp {
            host,
            username,
            password,
            from,
        } => match SmtpNotifier::new(host, username.clone(), password.clone(), from.clone()) {
            Ok(notifier) => {
                tracing::info!("Welcome notifications via SMTP relay {host}");
                WelcomeNotifier::Smtp(notifier)
            }
            Err(e) => {
                tracing::warn!("SMTP relay setup failed ({e}); notifications disabled");
                WelcomeNotifier::Disabled
            }
        },
        NotifierSettings::Disabled => WelcomeNotifier::Disabled,
    }
}
