/**
 * Google Identity Verification
 *
 * This module validates Google ID tokens (the `credential` a Google
 * Sign-In client posts to us) and extracts a verified identity claim.
 *
 * # Verification Process
 *
 * 1. Decode the unverified JWT header to learn which key (`kid`) signed
 *    the assertion
 * 2. Fetch Google's current public keys (JWKS) over HTTPS
 * 3. Verify the RS256 signature with the matching key
 * 4. Check audience (our registered client id), issuer
 *    (accounts.google.com), and expiry
 *
 * The signature chain is Google's trust root; nothing here reimplements
 * it -- we verify against the keys Google publishes.
 *
 * # Bounds
 *
 * The JWKS fetch is bounded by a request timeout so a slow identity
 * provider cannot stall a login task.
 */

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Google's published JWKS endpoint
const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Accepted `iss` values for Google ID tokens
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Bound on the JWKS fetch
const CERTS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Verified identity claim extracted from a Google ID token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleIdentity {
    /// Google subject id (stable per account)
    pub subject: String,
    /// Verified email address
    pub email: String,
    /// Display name, `"User"` when Google omits it
    pub name: String,
}

/// Errors from Google ID token verification
#[derive(Debug, Error)]
pub enum GoogleVerifyError {
    /// Could not fetch Google's public keys
    #[error("Failed to fetch Google signing keys: {0}")]
    KeyFetch(#[from] reqwest::Error),

    /// The assertion names no key, or an unknown one
    #[error("Assertion signed by an unknown key")]
    UnknownKey,

    /// Signature, audience, issuer, or expiry check failed
    #[error("Invalid Google assertion: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// JWKS document shape (only the RSA fields we verify with)
#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

/// Claims carried by a Google ID token
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    sub: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
}

/// Validates Google ID tokens against Google's public keys
#[derive(Clone)]
pub struct GoogleVerifier {
    client_id: String,
    http: reqwest::Client,
    certs_url: String,
}

impl GoogleVerifier {
    /// Create a verifier for this service's registered client id
    pub fn new(client_id: impl Into<String>, http: reqwest::Client) -> Self {
        Self::with_certs_url(client_id, http, GOOGLE_CERTS_URL)
    }

    /// Create a verifier fetching keys from a non-default URL (tests)
    pub fn with_certs_url(
        client_id: impl Into<String>,
        http: reqwest::Client,
        certs_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            http,
            certs_url: certs_url.into(),
        }
    }

    /// Verify an ID token assertion and extract the identity claim
    ///
    /// # Errors
    ///
    /// Any failure -- unfetchable keys, unknown signing key, bad
    /// signature, wrong audience or issuer, expired token -- is an
    /// error; the caller decides how much of the reason to surface.
    pub async fn verify(&self, assertion: &str) -> Result<GoogleIdentity, GoogleVerifyError> {
        let header = decode_header(assertion)?;
        let kid = header.kid.ok_or(GoogleVerifyError::UnknownKey)?;

        let jwks = self.fetch_keys().await?;
        let jwk = jwks
            .keys
            .iter()
            .find(|key| key.kid == kid)
            .ok_or(GoogleVerifyError::UnknownKey)?;

        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.client_id]);
        validation.set_issuer(&GOOGLE_ISSUERS);

        let data = decode::<GoogleClaims>(assertion, &decoding_key, &validation)?;

        Ok(GoogleIdentity {
            subject: data.claims.sub,
            email: data.claims.email,
            name: data.claims.name.unwrap_or_else(|| "User".to_string()),
        })
    }

    /// Fetch Google's current signing keys
    async fn fetch_keys(&self) -> Result<JwkSet, reqwest::Error> {
        self.http
            .get(&self.certs_url)
            .timeout(CERTS_FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CLIENT_ID: &str = "client-id.apps.googleusercontent.com";

    fn verifier(certs_url: String) -> GoogleVerifier {
        GoogleVerifier::with_certs_url(CLIENT_ID, reqwest::Client::new(), certs_url)
    }

    /// An HS256 token with an arbitrary kid; structurally a JWT but
    /// never verifiable as a Google assertion.
    fn fake_assertion(kid: &str) -> String {
        let mut header = Header::default();
        header.kid = Some(kid.to_string());
        let claims = json!({
            "sub": "1234567890",
            "email": "user@example.com",
            "aud": CLIENT_ID,
            "iss": "accounts.google.com",
            "exp": 4_102_444_800u64,
        });
        encode(&header, &claims, &EncodingKey::from_secret(b"not-google")).unwrap()
    }

    async fn mock_jwks(server: &MockServer, keys: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/oauth2/v3/certs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "keys": keys })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_malformed_assertion_rejected() {
        let result = verifier("http://127.0.0.1:0/oauth2/v3/certs".to_string())
            .verify("not-a-jwt")
            .await;
        // Header decoding fails before any network access.
        assert!(matches!(result, Err(GoogleVerifyError::Token(_))));
    }

    #[tokio::test]
    async fn test_missing_kid_rejected() {
        let claims = json!({ "sub": "x", "email": "x@example.com", "exp": 4_102_444_800u64 });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"not-google"),
        )
        .unwrap();

        let result = verifier("http://127.0.0.1:0/oauth2/v3/certs".to_string())
            .verify(&token)
            .await;
        assert!(matches!(result, Err(GoogleVerifyError::UnknownKey)));
    }

    #[tokio::test]
    async fn test_unknown_signing_key_rejected() {
        let server = MockServer::start().await;
        mock_jwks(
            &server,
            json!([{ "kid": "known-key", "n": "AQAB", "e": "AQAB", "kty": "RSA" }]),
        )
        .await;

        let result = verifier(format!("{}/oauth2/v3/certs", server.uri()))
            .verify(&fake_assertion("some-other-key"))
            .await;
        assert!(matches!(result, Err(GoogleVerifyError::UnknownKey)));
    }

    #[tokio::test]
    async fn test_forged_signature_rejected() {
        let server = MockServer::start().await;
        // A syntactically valid RSA key; the assertion is HS256-signed
        // with a shared secret, so verification must fail either on the
        // algorithm or the signature.
        mock_jwks(
            &server,
            json!([{
                "kid": "key-1",
                "kty": "RSA",
                "e": "AQAB",
                "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw"
            }]),
        )
        .await;

        let result = verifier(format!("{}/oauth2/v3/certs", server.uri()))
            .verify(&fake_assertion("key-1"))
            .await;
        assert!(matches!(result, Err(GoogleVerifyError::Token(_))));
    }

    #[tokio::test]
    async fn test_unreachable_keys_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2/v3/certs"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = verifier(format!("{}/oauth2/v3/certs", server.uri()))
            .verify(&fake_assertion("key-1"))
            .await;
        assert!(matches!(result, Err(GoogleVerifyError::KeyFetch(_))));
    }
}
