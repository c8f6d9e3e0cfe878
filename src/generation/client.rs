/**
 * Text Generation Client
 *
 * Outbound client for the Gemini `generateContent` endpoint. This is a
 * thin I/O wrapper: it formats the prompt, posts it, and extracts the
 * generated text.
 *
 * # Degraded Responses
 *
 * Every failure -- missing key, non-200 status, timeout, transport
 * error, unexpected response shape -- produces placeholder text rather
 * than an error. The endpoint's contract is success-shaped either way;
 * callers always get a string.
 *
 * # Bounds
 *
 * Requests carry a 60-second timeout so a slow upstream cannot stall
 * the handling task.
 */

use serde::Deserialize;
use std::time::Duration;

/// Default API base
const GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model invoked for story generation
const GENERATION_MODEL: &str = "gemini-2.5-pro";

/// Bound on the generation call
const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Response shape of `generateContent` (the fields we read)
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// Client for the external text-generation API
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GenerationClient {
    /// Create a client; a missing key degrades every call
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, GENERATION_BASE_URL)
    }

    /// Create a client against a non-default base URL (tests)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Generate story text for an idea
    ///
    /// Always returns text: generated content on success, a diagnostic
    /// placeholder on any upstream failure.
    pub async fn generate(&self, idea: &str, category: &str, tone: &str, length: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Generation API key not configured; returning placeholder");
            return "Generation is not configured on this server.".to_string();
        };

        let prompt = build_prompt(idea, category, tone, length);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GENERATION_MODEL
        );
        let payload = serde_json::json!({
            "contents": [
                { "parts": [{ "text": prompt }] }
            ]
        });

        let response = match self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .timeout(GENERATION_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!("Generation request timed out");
                return "Generation request timed out. Please try a shorter prompt.".to_string();
            }
            Err(e) => {
                tracing::warn!("Generation request failed: {e}");
                return format!("Generation request failed: {e}");
            }
        };

        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!("Generation API error: {detail}");
            return format!("Generation API error: {detail}");
        }

        match response.json::<GenerateContentResponse>().await {
            Ok(body) => extract_text(body)
                .unwrap_or_else(|| "Generation API returned no content.".to_string()),
            Err(e) => {
                tracing::warn!("Generation response unreadable: {e}");
                format!("Generation request failed: {e}")
            }
        }
    }
}

/// Format the generation prompt
///
/// Length hints: "short" is about 300 words, "long" at least 1500,
/// anything else about 800.
fn build_prompt(idea: &str, category: &str, tone: &str, length: &str) -> String {
    let length_hint = match length {
        "short" => "about 300 words",
        "long" => "at least 1500 words",
        _ => "about 800 words",
    };

    format!("Write a {tone} {category} of {length_hint} based on this idea: {idea}")
}

/// Pull the first candidate's text out of the response
fn extract_text(body: GenerateContentResponse) -> Option<String> {
    body.candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_prompt_length_hints() {
        assert_eq!(
            build_prompt("a lost key", "mystery", "tense", "short"),
            "Write a tense mystery of about 300 words based on this idea: a lost key"
        );
        assert!(build_prompt("x", "saga", "epic", "long").contains("at least 1500 words"));
        assert!(build_prompt("x", "tale", "warm", "medium").contains("about 800 words"));
        assert!(build_prompt("x", "tale", "warm", "unknown").contains("about 800 words"));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!(
                "/v1beta/models/{GENERATION_MODEL}:generateContent"
            )))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "Once upon a time..." }] } }
                ]
            })))
            .mount(&server)
            .await;

        let client = GenerationClient::with_base_url(Some("test-key".to_string()), server.uri());
        let text = client.generate("a dragon", "fantasy", "whimsical", "short").await;
        assert_eq!(text, "Once upon a time...");
    }

    #[tokio::test]
    async fn test_generate_upstream_error_is_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = GenerationClient::with_base_url(Some("test-key".to_string()), server.uri());
        let text = client.generate("a dragon", "fantasy", "whimsical", "short").await;
        assert!(text.starts_with("Generation API error:"));
        assert!(text.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_generate_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GenerationClient::with_base_url(Some("test-key".to_string()), server.uri());
        let text = client.generate("a dragon", "fantasy", "whimsical", "short").await;
        assert_eq!(text, "Generation API returned no content.");
    }

    #[tokio::test]
    async fn test_generate_without_key() {
        let client = GenerationClient::with_base_url(None, "http://127.0.0.1:0");
        let text = client.generate("a dragon", "fantasy", "whimsical", "short").await;
        assert_eq!(text, "Generation is not configured on this server.");
    }
}
