/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. The wire field names follow the service's
 * original contract.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the username and password for account registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username
    pub username: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the username and password for authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's username
    pub username: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Google login request
#[derive(Deserialize, Serialize, Debug)]
pub struct GoogleLoginRequest {
    /// Google ID token posted by the sign-in client
    pub credential: String,
}

/// Token response
///
/// Returned by login and google-login. Signup does not return a token:
/// registration is not an implicit login.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Session token (30-minute expiration)
    pub token: String,
    /// Always "bearer"
    pub token_type: String,
    /// The username the token was issued for
    pub identifier: String,
}

impl TokenResponse {
    /// Build a bearer token response
    pub fn bearer(token: String, identifier: impl Into<String>) -> Self {
        Self {
            token,
            token_type: "bearer".to_string(),
            identifier: identifier.into(),
        }
    }
}

/// Plain acknowledgment response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    /// Build an acknowledgment
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse::bearer("tok".to_string(), "alice");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "token": "tok",
                "token_type": "bearer",
                "identifier": "alice",
            })
        );
    }

    #[test]
    fn test_message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("Account created!")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Account created!" }));
    }
}
