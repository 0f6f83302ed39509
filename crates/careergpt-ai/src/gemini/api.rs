//! AnswerClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, AnswerClient};

use super::client::{parse_response, GeminiClient};

#[async_trait]
impl AnswerClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, prompt_len = prompt.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            // The URL carries the key, keep it out of error messages
            .map_err(|e| AiError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.without_url().to_string()))?;

        parse_response(&json)
    }
}
