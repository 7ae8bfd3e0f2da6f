//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use crate::CompletionError;

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CompletionError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for a single-prompt generation.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response into the generated text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, CompletionError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(CompletionError::ApiError(format!("prompt blocked: {reason}")));
        }

        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| CompletionError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| CompletionError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        if content.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("unknown");
            return Err(CompletionError::ParseError(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_max_tokens(256)).unwrap()
    }

    #[test]
    fn api_url_targets_generate_content() {
        let url = client().api_url();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_wraps_prompt_as_user_content() {
        let body = client().build_request_body("How do I sleep better?");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "How do I sleep better?"
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn parse_response_concatenates_text_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Drink water." }, { "text": "\nSleep early." }] },
                "finishReason": "STOP"
            }]
        });
        let text = client().parse_response(json).unwrap();
        assert_eq!(text, "Drink water.\nSleep early.");
    }

    #[test]
    fn parse_response_without_candidates_fails() {
        let err = client()
            .parse_response(serde_json::json!({ "usageMetadata": {} }))
            .unwrap_err();
        assert!(matches!(err, CompletionError::ParseError(_)));
    }

    #[test]
    fn parse_response_with_empty_candidates_fails() {
        let err = client()
            .parse_response(serde_json::json!({ "candidates": [] }))
            .unwrap_err();
        assert!(matches!(err, CompletionError::ParseError(ref m) if m == "empty candidates"));
    }

    #[test]
    fn parse_response_without_text_reports_finish_reason() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        });
        let err = client().parse_response(json).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn parse_response_blocked_prompt_is_api_error() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "OTHER" } });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, CompletionError::ApiError(ref m) if m.contains("OTHER")));
    }
}
