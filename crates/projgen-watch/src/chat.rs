//! Minimal OpenAI chat-completions client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WatchError, WatchResult};

pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable read by [`ChatClient::from_env`].
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

const GENERIC_FAILURE: &str = "Failed to get recommendations from OpenAI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// The `error.message` of a failed response, or a generic message.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| GENERIC_FAILURE.to_string())
}

fn first_choice(body: CompletionResponse) -> WatchResult<ChatCompletion> {
    let usage = body.usage;
    body.choices
        .into_iter()
        .next()
        .map(|choice| ChatCompletion {
            content: choice.message.content,
            usage,
        })
        .ok_or_else(|| WatchError::api("No recommendations received from OpenAI"))
}

#[derive(Clone)]
pub struct ChatClient {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(url: &str, api_key: &str) -> WatchResult<Self> {
        if api_key.trim().is_empty() {
            return Err(WatchError::MissingApiKey(OPENAI_API_KEY_VAR));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;

        Ok(Self {
            url: url.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn from_env() -> WatchResult<Self> {
        let key = std::env::var(OPENAI_API_KEY_VAR).unwrap_or_default();
        Self::new(DEFAULT_CHAT_URL, &key)
    }

    /// Send one completion request. Failures are returned as is, never retried.
    pub async fn complete(&self, request: &ChatRequest) -> WatchResult<ChatCompletion> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Chat completion failed");
            return Err(WatchError::Api(error_message(&body)));
        }

        let body: CompletionResponse = response.json().await?;
        let completion = first_choice(body)?;
        debug!(
            tokens = completion.usage.map(|u| u.total_tokens),
            "Chat completion received"
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let body = r#"{"error": {"message": "Invalid API key", "type": "invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Invalid API key");
        assert_eq!(error_message("<html>bad gateway</html>"), GENERIC_FAILURE);
        assert_eq!(error_message(""), GENERIC_FAILURE);
    }

    #[test]
    fn test_first_choice() {
        let body: CompletionResponse = serde_json::from_str(
            r#"{
                "choices": [{"message": {"role": "assistant", "content": "- Go for a walk"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            }"#,
        )
        .unwrap();
        let completion = first_choice(body).unwrap();
        assert_eq!(completion.content, "- Go for a walk");
        assert_eq!(completion.usage.map(|u| u.total_tokens), Some(15));

        let empty: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(first_choice(empty), Err(WatchError::Api(_))));
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("be nice"), ChatMessage::user("hi")],
            temperature: 0.8,
            max_tokens: 500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 500);
    }
}
