//! Gemini API client struct, request building, and response parsing.

use crate::AiError;

use super::config::GeminiConfig;

/// Gemini API client.
///
/// Uses a plain `reqwest::Client`: no timeout and no retry, a request
/// resolves or fails as the transport decides.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint without the key; the key goes in the query string.
    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body: a single content entry with one text part.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        })
    }
}

/// Extract `candidates[0].content.parts[0].text` from a response.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
    let candidates = json["candidates"]
        .as_array()
        .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

    let first = candidates
        .first()
        .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

    let part = first["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.first())
        .ok_or_else(|| AiError::ParseError("first candidate has no parts".to_string()))?;

    part["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AiError::ParseError("first part has no text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_url_joins_model_and_method() {
        let client = GeminiClient::new(
            GeminiConfig::new("k").with_base_url("http://localhost:9000/v1beta/models/"),
        );
        assert_eq!(
            client.api_url(),
            "http://localhost:9000/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn api_url_never_contains_key() {
        let client = GeminiClient::new(GeminiConfig::new("secret-key"));
        assert!(!client.api_url().contains("secret-key"));
    }

    #[test]
    fn request_body_has_single_text_part() {
        let client = GeminiClient::new(GeminiConfig::new("k"));
        let body = client.build_request_body("hello");
        assert_eq!(
            body,
            json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn parses_first_candidate_text() {
        let json = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        });
        assert_eq!(parse_response(&json).unwrap(), "first");
    }

    #[test]
    fn missing_candidates_is_parse_error() {
        let json = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = parse_response(&json).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn empty_candidates_is_parse_error() {
        let err = parse_response(&json!({ "candidates": [] })).unwrap_err();
        assert!(err.to_string().contains("empty candidates"));
    }

    #[test]
    fn candidate_without_parts_is_parse_error() {
        let json = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        assert!(parse_response(&json).is_err());
    }

    #[test]
    fn non_string_text_is_parse_error() {
        let json = json!({ "candidates": [{ "content": { "parts": [{ "text": 42 }] } }] });
        assert!(parse_response(&json).is_err());
    }
}
