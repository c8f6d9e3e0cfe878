/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP surface. Every
 * handler returns `Result<Json<T>, ApiError>` and the conversion module
 * turns each variant into a JSON error response.
 *
 * # Information Discipline
 *
 * Two variants deliberately carry fixed messages:
 *
 * - `Unauthorized` never says whether the account was missing, the
 *   password was wrong, or the token was expired/tampered/malformed.
 * - `NotFound` never says whether the story was absent or owned by
 *   someone else.
 *
 * Server faults (`Database`, `Internal`) are logged with their cause at
 * the conversion boundary and reach the client as a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// Each variant maps to one HTTP status code via [`ApiError::status_code`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable rejection reason
        message: String,
    },

    /// Duplicate identifier at signup
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable conflict description
        message: String,
    },

    /// Bad credentials or invalid/expired/missing token
    ///
    /// Carries no detail: login and token failures are uniform so the
    /// response cannot be used to probe for account existence or token
    /// failure causes.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Resource absent or not owned by the caller
    #[error("{message}")]
    NotFound {
        /// Fixed per-resource message (e.g. "Story not found")
        message: String,
    },

    /// External collaborator error that must surface to the caller
    #[error("Upstream failure: {message}")]
    UpstreamFailure {
        /// Human-readable upstream failure description
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other server fault
    #[error("Internal error: {message}")]
    Internal {
        /// Internal description, logged but never sent to the client
        message: String,
    },
}

impl ApiError {
    /// Create an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a `Conflict` error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a `NotFound` error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an `UpstreamFailure` error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    /// Create an `Internal` error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `UpstreamFailure` - 502 Bad Gateway
    /// - `Database` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server faults are masked here; their real cause is logged by the
    /// `IntoResponse` conversion.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::Unauthorized => "Invalid credentials".to_string(),
            Self::NotFound { message } => message.clone(),
            Self::UpstreamFailure { message } => message.clone(),
            Self::Database(_) | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input() {
        let error = ApiError::invalid_input("Username and password are required");
        match error {
            ApiError::InvalidInput { message } => {
                assert_eq!(message, "Username and password are required");
            }
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::not_found("Story not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::upstream("provider unreachable").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_message_is_fixed() {
        assert_eq!(ApiError::Unauthorized.message(), "Invalid credentials");
    }

    #[test]
    fn test_server_faults_are_masked() {
        let error = ApiError::internal("connection pool exhausted");
        assert_eq!(error.message(), "Internal server error");

        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_from_sqlx_error() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::Database(_) => {}
            _ => panic!("Expected Database variant"),
        }
    }
}
