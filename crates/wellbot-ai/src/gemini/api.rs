//! CompletionClient trait implementation for GeminiClient.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{CompletionClient, CompletionError};

use super::client::GeminiClient;

/// Map a non-success HTTP status to its error category.
/// Returns `None` for success statuses.
pub(crate) fn classify_status(status: StatusCode, body: &str) -> Option<CompletionError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CompletionError::AuthError(format!("HTTP {status}: {body}"))
        }
        _ => CompletionError::ApiError(format!("HTTP {status}: {body}")),
    })
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, prompt_len = prompt.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.config.request_timeout)
                } else {
                    CompletionError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &text)
                .unwrap_or_else(|| CompletionError::ApiError(format!("HTTP {status}: {text}"))));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(self.config.request_timeout)
            } else {
                CompletionError::ParseError(e.to_string())
            }
        })?;

        self.parse_response(json)
    }
}
