//! DeepSeek-compatible chat-completions provider.
//!
//! Sends OpenAI-style `chat/completions` requests with the registered
//! capability tool specs attached, and extracts the reply text plus any
//! tool-call payload from the response body.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::capability::ToolSpec;
use crate::config::AgentConfig;
use crate::error::{ParaverseError, Result};

use super::{ConversationTurn, ModelResponse, ModelService, ToolPolicy, TurnRole};

const BASE_URL: &str = "https://api.deepseek.com/chat/completions";

/// A [`ModelService`] backed by an HTTP chat-completions endpoint.
#[derive(Clone)]
pub struct HttpModelService {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    tools: Vec<ToolSpec>,
}

impl HttpModelService {
    /// Creates a provider from validated agent configuration.
    ///
    /// `tools` are the capability specs advertised on every call; the
    /// tool-choice policy decides per call whether the model may pick one
    /// freely or is forced to a single named capability.
    pub fn new(config: &AgentConfig, api_key: impl Into<String>, tools: Vec<ToolSpec>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: BASE_URL.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            tools,
        }
    }

    /// Overrides the endpoint URL (self-hosted or proxy deployments).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<Value>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

fn to_messages(turns: &[ConversationTurn]) -> Vec<ChatMessage> {
    turns
        .iter()
        .map(|turn| ChatMessage {
            role: match turn.role {
                TurnRole::System => "system",
                TurnRole::User => "user",
            },
            content: turn.content.clone(),
        })
        .collect()
}

fn tool_choice_payload(policy: &ToolPolicy) -> Value {
    match policy {
        ToolPolicy::Auto => Value::String("auto".to_string()),
        ToolPolicy::Forced(name) => serde_json::json!({
            "type": "function",
            "function": { "name": name },
        }),
    }
}

fn extract_content(root: &Value) -> Option<String> {
    let message = root.get("choices")?.as_array()?.first()?.get("message")?;
    message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
}

fn extract_tool_invocation(root: &Value) -> Option<Value> {
    let message = root
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?;
    message.get("tool_calls").filter(|v| !v.is_null()).cloned()
}

fn map_http_error(status: StatusCode, body: String) -> ParaverseError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    ParaverseError::model_service(format!("provider returned {status}: {message}"))
}

#[async_trait]
impl ModelService for HttpModelService {
    async fn run(&self, turns: &[ConversationTurn], policy: ToolPolicy) -> Result<ModelResponse> {
        let tools: Vec<Value> = self
            .tools
            .iter()
            .map(ToolSpec::to_request_payload)
            .collect();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: to_messages(turns),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            tool_choice: (!tools.is_empty()).then(|| tool_choice_payload(&policy)),
            tools: (!tools.is_empty()).then_some(tools),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                ParaverseError::model_service(format!("provider request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read provider error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response.json().await.map_err(|err| {
            ParaverseError::model_service(format!("failed to parse provider response: {err}"))
        })?;

        let tool_invocation = extract_tool_invocation(&payload);
        let content = extract_content(&payload).unwrap_or_default();
        if content.is_empty() && tool_invocation.is_none() {
            return Err(ParaverseError::model_service(
                "provider response contained neither content nor a tool call",
            ));
        }

        Ok(ModelResponse {
            content,
            tool_invocation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_content_from_completion_body() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "hello" } }
            ]
        });
        assert_eq!(extract_content(&body).as_deref(), Some("hello"));
        assert!(extract_tool_invocation(&body).is_none());
    }

    #[test]
    fn test_extract_tool_calls_when_present() {
        let body = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{ "function": { "name": "generate-timeline" } }]
                }
            }]
        });
        let invocation = extract_tool_invocation(&body).unwrap();
        assert_eq!(
            invocation[0]["function"]["name"],
            json!("generate-timeline")
        );
    }

    #[test]
    fn test_forced_tool_choice_payload_names_the_capability() {
        let payload = tool_choice_payload(&ToolPolicy::Forced("analyze-personality".into()));
        assert_eq!(payload["function"]["name"], json!("analyze-personality"));
        assert_eq!(
            tool_choice_payload(&ToolPolicy::Auto),
            Value::String("auto".into())
        );
    }

    #[test]
    fn test_http_error_prefers_provider_message() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "rate limited"}}"#.to_string(),
        );
        assert!(err.to_string().contains("rate limited"));
        assert!(err.is_model_service());
    }
}
