//! Universe domain model.
//!
//! A [`Universe`] is a generated alternate-reality record: immutable at its
//! core (profile, divergence point, generated content) plus an append-only
//! conversation log. The core never interprets `base_profile` or
//! `generated_content`; both are stored and forwarded verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored alternate-reality record for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    /// Unique universe identifier (UUID format), set at creation
    pub id: String,
    /// Identifier of the requesting user, set at creation
    pub owner_id: String,
    /// Arbitrary structured description of the real-world starting point
    pub base_profile: Value,
    /// Free-text description of the decision/event that created the branch
    pub divergence_point: Option<String>,
    /// The model's response payload at creation time, set once
    pub generated_content: Value,
    /// Timestamp when the universe was created (ISO 8601 format)
    pub created_at: String,
    /// Ordered, append-only conversation history with the parallel self
    #[serde(default)]
    pub conversation_log: Vec<ConversationEntry>,
}

/// One exchange appended to a universe's conversation log.
///
/// Entries are strictly ordered by append sequence and never mutated or
/// removed once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// The inbound user text
    pub message: String,
    /// The model's reply content
    pub response: String,
    /// Timestamp when the entry was appended (ISO 8601 format)
    pub timestamp: String,
}

impl ConversationEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(message: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: response.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
