//! LLM client — OpenAI-compatible `/chat/completions` over HTTP.
//!
//! Works against hosted endpoints and local servers (LM Studio, Ollama).
//! One attempt per call; the engine's next cycle is the retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::{AssistError, AssistResult};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    temperature: f64,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiCompatClient {
    base_url: String,
    api_key: String,
    configured: bool,
}

impl OpenAiCompatClient {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            configured: config.has_api_key(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionProvider for OpenAiCompatClient {
    fn id(&self) -> &str {
        "openai-compatible"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn complete(&self, request: &CompletionRequest) -> AssistResult<String> {
        let url = self.endpoint();
        tracing::info!(
            model = %request.model,
            prompt_len = request.user_prompt.len(),
            timeout_secs = request.timeout_secs,
            "Completion request starting"
        );

        let body = ChatCompletionBody {
            model: &request.model,
            temperature: request.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
        };

        let mut response = ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .config()
            .timeout_global(Some(Duration::from_secs(u64::from(request.timeout_secs))))
            .build()
            .send_json(&body)
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Completion request failed");
                AssistError::ModelCall(e.to_string())
            })?;

        let payload: ChatCompletionResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| AssistError::ModelCall(format!("invalid completion payload: {}", e)))?;

        let content = first_choice_content(payload);
        tracing::info!(response_len = content.len(), "Completion request finished");
        Ok(content)
    }
}

/// Trimmed content of the first choice; empty when the model returned none.
fn first_choice_content(payload: ChatCompletionResponse) -> String {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_slash() {
        let cfg = ModelConfig {
            base_url: " http://127.0.0.1:1234/v1/ ".to_string(),
            ..ModelConfig::default()
        };
        assert_eq!(
            OpenAiCompatClient::new(&cfg).endpoint(),
            "http://127.0.0.1:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_placeholder_key_unconfigured() {
        let cfg = ModelConfig {
            api_key: "your_openai_api_key".to_string(),
            ..ModelConfig::default()
        };
        assert!(!OpenAiCompatClient::new(&cfg).is_configured());
    }

    #[test]
    fn test_body_shape() {
        let body = ChatCompletionBody {
            model: "m",
            temperature: 0.7,
            messages: [
                ChatMessage { role: "system", content: "s" },
                ChatMessage { role: "user", content: "u" },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "u");
        assert_eq!(json["model"], "m");
    }

    #[test]
    fn test_first_choice_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"  [\"a\"] \n"}}]}"#;
        let payload: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice_content(payload), "[\"a\"]");

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(first_choice_content(empty), "");

        let null_content: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(first_choice_content(null_content), "");
    }
}
