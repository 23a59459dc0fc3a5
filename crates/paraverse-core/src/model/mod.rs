//! Model service boundary.
//!
//! The language-model provider is opaque to this crate beyond a single
//! logical call: an ordered sequence of conversation turns plus a
//! tool-choice policy, returning a response with free-text content and an
//! optional structured tool-invocation payload. Provider failures surface
//! verbatim; the core performs no retry and enforces no timeout.

mod http;

pub use http::HttpModelService;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of one turn in a model request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Framing/instruction turn.
    System,
    /// End-user turn.
    User,
}

/// One ordered turn in a model request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// The role of the turn author.
    pub role: TurnRole,
    /// The turn text.
    pub content: String,
}

impl ConversationTurn {
    /// Creates a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }
}

/// Tool-choice policy for one model call.
///
/// Modeled as a two-variant type rather than a free-form string so an
/// invalid policy value is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolPolicy {
    /// The model chooses among all registered capabilities.
    Auto,
    /// The model is forced to call the named capability.
    Forced(String),
}

/// Response object returned by the model service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Free-text reply content.
    pub content: String,
    /// Structured tool-invocation payload, when the model produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_invocation: Option<Value>,
}

impl ModelResponse {
    /// Creates a text-only response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_invocation: None,
        }
    }
}

/// External language-model inference boundary.
///
/// Implementations run one inference call over the given turns under the
/// given tool policy. Failures (timeouts, malformed responses, provider
/// errors) are surfaced as `ModelService` errors without interpretation.
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Runs a single model call.
    async fn run(&self, turns: &[ConversationTurn], policy: ToolPolicy) -> Result<ModelResponse>;
}
