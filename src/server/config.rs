/**
 * Server Configuration
 *
 * This module loads all configuration from environment variables into
 * one explicitly constructed `AppConfig`. Required settings fail fast
 * at startup; optional collaborators degrade with a logged warning.
 *
 * # Configuration Sources
 *
 * | Variable | Required | Purpose |
 * |---|---|---|
 * | `DATABASE_URL` | yes | PostgreSQL connection string |
 * | `SECRET_KEY` | yes | Session token signing secret |
 * | `SESSION_TTL_MINUTES` | no (30) | Session token lifetime |
 * | `SERVER_PORT` | no (3000) | Listen port |
 * | `GOOGLE_CLIENT_ID` | no | Registered client id for Google login |
 * | `NOTIFY_BACKEND` | no | `resend`, `smtp`, or unset |
 * | `RESEND_API_KEY` | with resend | Provider API key |
 * | `EMAIL_FROM` | no | Welcome email sender address |
 * | `SMTP_HOST` / `SMTP_USERNAME` / `SMTP_PASSWORD` | with smtp | Relay settings |
 * | `GEMINI_API_KEY` | no | Generation API key |
 */

use chrono::Duration;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::sessions::SESSION_TTL_MINUTES;

/// Default welcome email sender
const DEFAULT_EMAIL_FROM: &str = "onboarding@resend.dev";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {name}")]
    MissingVar {
        /// The variable name
        name: &'static str,
    },

    /// Database connection failure
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Notification channel settings
#[derive(Debug, Clone)]
pub enum NotifierSettings {
    /// Resend HTTP API
    Resend {
        /// Provider API key
        api_key: String,
        /// Sender address
        from: String,
    },
    /// Direct SMTP relay
    Smtp {
        /// Relay host
        host: String,
        /// Relay username
        username: String,
        /// Relay password
        password: String,
        /// Sender address
        from: String,
    },
    /// No notification channel
    Disabled,
}

/// Application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Session token signing secret
    pub secret_key: String,
    /// Session token lifetime
    pub session_ttl: Duration,
    /// Listen port
    pub server_port: u16,
    /// Registered Google client id; None disables federated login
    pub google_client_id: Option<String>,
    /// Welcome notification channel
    pub notifier: NotifierSettings,
    /// Generation API key; None degrades the generation endpoint
    pub generation_api_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingVar` when `DATABASE_URL` or `SECRET_KEY` is
    /// not set. Everything else falls back with a logged warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let secret_key = require_var("SECRET_KEY")?;

        let session_ttl = std::env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .map(Duration::minutes)
            .unwrap_or_else(|| Duration::minutes(SESSION_TTL_MINUTES));

        let server_port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").ok();
        if google_client_id.is_none() {
            tracing::warn!("GOOGLE_CLIENT_ID not set; Google login will reject all assertions");
        }

        let generation_api_key = std::env::var("GEMINI_API_KEY").ok();
        if generation_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; generation will return placeholders");
        }

        Ok(Self {
            database_url,
            secret_key,
            session_ttl,
            server_port,
            google_client_id,
            notifier: load_notifier_settings(),
            generation_api_key,
        })
    }
}

/// Read a required environment variable
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar { name })
}

/// Resolve the notification channel from `NOTIFY_BACKEND`
///
/// An incompletely configured backend degrades to `Disabled` rather
/// than failing startup: notification is best-effort by contract.
fn load_notifier_settings() -> NotifierSettings {
    let from = std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string());

    match std::env::var("NOTIFY_BACKEND").as_deref() {
        Ok("resend") => match std::env::var("RESEND_API_KEY") {
            Ok(api_key) => NotifierSettings::Resend { api_key, from },
            Err(_) => {
                tracing::warn!("RESEND_API_KEY not set; notifications disabled");
                NotifierSettings::Disabled
            }
        },
        Ok("smtp") => {
            let settings = (
                std::env::var("SMTP_HOST"),
                std::env::var("SMTP_USERNAME"),
                std::env::var("SMTP_PASSWORD"),
            );
            match settings {
                (Ok(host), Ok(username), Ok(password)) => NotifierSettings::Smtp {
                    host,
                    username,
                    password,
                    from,
                },
                _ => {
                    tracing::warn!("Incomplete SMTP settings; notifications disabled");
                    NotifierSettings::Disabled
                }
            }
        }
        Ok(other) => {
            tracing::warn!("Unknown NOTIFY_BACKEND '{other}'; notifications disabled");
            NotifierSettings::Disabled
        }
        Err(_) => {
            tracing::info!("NOTIFY_BACKEND not set; notifications disabled");
            NotifierSettings::Disabled
        }
    }
}

/// Connect to the database and run migrations
///
/// # Errors
///
/// Connection and migration failures both abort startup: the service
/// has no useful surface without its store.
pub async fn connect_database(database_url: &str) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
