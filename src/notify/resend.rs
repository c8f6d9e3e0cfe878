/**
 * Resend Notification Backend
 *
 * Delivers the welcome email through the Resend HTTP API. A bounded
 * POST with a bearer key; any failure is a logged `false`.
 */

use std::time::Duration;

/// Resend API base
const RESEND_BASE_URL: &str = "https://api.resend.com";

/// Bound on the provider call
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Welcome email sender backed by the Resend API
#[derive(Clone)]
pub struct ResendNotifier {
    http: reqwest::Client,
    api_key: String,
    from: String,
    base_url: String,
}

impl ResendNotifier {
    /// Create a notifier sending from the given address
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self::with_base_url(api_key, from, RESEND_BASE_URL)
    }

    /// Create a notifier against a non-default API base (tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        from: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            from: from.into(),
            base_url: base_url.into(),
        }
    }

    /// Send the welcome email; false on any failure
    pub async fn send(&self, email: &str, name: &str) -> bool {
        let payload = serde_json::json!({
            "from": self.from,
            "to": [email],
            "subject": super::WELCOME_SUBJECT,
            "html": super::welcome_html(name),
        });

        let result = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(SEND_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Welcome email queued for {email}");
                true
            }
            Ok(response) => {
                tracing::warn!("Resend rejected welcome email: {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("Resend request failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "to": ["alice@example.com"],
                "subject": "Welcome to Penscribe!",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "e-1"
            })))
            .mount(&server)
            .await;

        let notifier =
            ResendNotifier::with_base_url("test-key", "hello@example.com", server.uri());
        assert!(notifier.send("alice@example.com", "Alice").await);
    }

    #[tokio::test]
    async fn test_send_provider_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let notifier =
            ResendNotifier::with_base_url("test-key", "hello@example.com", server.uri());
        assert!(!notifier.send("alice@example.com", "Alice").await);
    }
}
