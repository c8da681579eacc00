//! OpenAI-compatible chat-completions adapter.
//!
//! Implements the [`TextBackend`] port against any endpoint speaking the
//! OpenAI `/chat/completions` JSON shape. No retry lives here — fallback
//! policy belongs to the application-layer invoker; this adapter reports
//! exactly one attempt's outcome.

use async_trait::async_trait;
use draftsmith_application::ports::text_backend::{BackendError, CompletionRequest, TextBackend};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP adapter for an OpenAI-style chat-completions backend.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the adapter at a compatible non-OpenAI endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        // Trailing slash would double up in the joined URL
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Map a non-success HTTP status to the port's error taxonomy.
fn classify_status(status: StatusCode, body: &str) -> BackendError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            BackendError::Auth(format!("HTTP {}", status.as_u16()))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            BackendError::RateLimited(format!("HTTP {}", status.as_u16()))
        }
        _ => BackendError::RequestFailed(format!(
            "HTTP {}: {}",
            status.as_u16(),
            draftsmith_domain::truncate_str(body, 200)
        )),
    }
}

#[async_trait]
impl TextBackend for OpenAiBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, BackendError> {
        let body = ChatRequest {
            model: request.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        debug!(
            "POST {}/chat/completions model={}",
            self.base_url, request.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::RequestFailed(format!("malformed response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(BackendError::EmptyResponse);
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftsmith_domain::Model;

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: Model::Gpt4.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a writer.",
                },
                ChatMessage {
                    role: "user",
                    content: "Write.",
                },
            ],
            temperature: 0.7,
            max_tokens: 800,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Write.");
        assert_eq!(json["max_tokens"], 800);
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Hello"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hello")
        );
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, ""),
            BackendError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            BackendError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            BackendError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let backend = OpenAiBackend::new("key").with_base_url("http://localhost:8080/v1/");
        assert_eq!(backend.base_url, "http://localhost:8080/v1");
    }
}
