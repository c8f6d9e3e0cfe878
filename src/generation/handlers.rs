/**
 * Generation Handler
 *
 * HTTP handler for POST /generate. The endpoint is unauthenticated, as
 * the original service ships it, and its response is success-shaped
 * even on upstream failure: the body's `text` field carries either
 * generated content or a diagnostic placeholder.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::generation::client::GenerationClient;

fn default_category() -> String {
    "short story".to_string()
}

fn default_tone() -> String {
    "neutral".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

/// Generation request
#[derive(Deserialize, Serialize, Debug)]
pub struct GenerateRequest {
    /// The story idea to expand
    #[serde(default)]
    pub idea: String,
    /// Story category
    #[serde(default = "default_category")]
    pub category: String,
    /// Story tone
    #[serde(default = "default_tone")]
    pub tone: String,
    /// "short", "long", or anything else for medium
    #[serde(default = "default_length")]
    pub length: String,
}

/// Generation response
#[derive(Serialize, Deserialize, Debug)]
pub struct GenerateResponse {
    /// Generated text, or a placeholder on upstream failure
    pub text: String,
}

/// Generate story text from an idea
pub async fn generate(
    State(client): State<GenerationClient>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    tracing::info!(
        "Generation request: category={}, tone={}, length={}",
        request.category,
        request.tone,
        request.length
    );

    let text = client
        .generate(&request.idea, &request.category, &request.tone, &request.length)
        .await;

    Json(GenerateResponse { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_defaults() {
        let request: GenerateRequest = serde_json::from_str(r#"{"idea": "a dragon"}"#).unwrap();
        assert_eq!(request.idea, "a dragon");
        assert_eq!(request.category, "short story");
        assert_eq!(request.tone, "neutral");
        assert_eq!(request.length, "medium");
    }
}
