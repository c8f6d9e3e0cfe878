/**
 * Session Tokens
 *
 * This module implements the session token service: signed, expiring
 * bearer tokens proving a resolved username. Tokens are HS256 JWTs and
 * are fully stateless -- nothing is persisted, so there is no
 * revocation; compromise requires rotating the server secret.
 *
 * # Uniform Verification Failure
 *
 * `SessionSigner::verify` collapses every failure -- bad signature,
 * expired, malformed -- into the single `InvalidToken` outcome. Callers
 * (and therefore clients) cannot distinguish the causes.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session token lifetime
pub const SESSION_TTL_MINUTES: i64 = 30;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Uniform token verification failure
///
/// Deliberately carries no cause.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid token")]
pub struct InvalidToken;

/// Issues and verifies session tokens
///
/// Constructed once at startup from the configured secret and TTL and
/// shared through application state. Cloning is cheap.
#[derive(Clone)]
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionSigner {
    /// Create a signer from the server secret and token TTL
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // Zero leeway: "expires in the future" means exactly that.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Create a signer with the default 30-minute TTL
    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, Duration::minutes(SESSION_TTL_MINUTES))
    }

    /// Issue a signed token for a username
    ///
    /// The expiry is issuance time plus the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.ttl).timestamp() as u64,
            iat: now.timestamp() as u64,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return the username it was issued for
    ///
    /// Signature integrity is checked before expiry; either failure (or
    /// a malformed token) yields the same `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<String, InvalidToken> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> SessionSigner {
        SessionSigner::with_default_ttl("test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let token = signer().issue("alice").unwrap();
        assert!(!token.is_empty());
        assert_eq!(signer().verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let expired = SessionSigner::new("test-secret", Duration::minutes(-1));
        let token = expired.issue("alice").unwrap();
        assert_eq!(expired.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let token = signer().issue("alice").unwrap();

        // Flip a byte in the signed payload segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let mut payload = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert_eq!(signer().verify(&tampered), Err(InvalidToken));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = signer().issue("alice").unwrap();
        let other = SessionSigner::with_default_ttl("other-secret");
        assert_eq!(other.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        assert_eq!(signer().verify("not.a.token"), Err(InvalidToken));
        assert_eq!(signer().verify(""), Err(InvalidToken));
    }
}
