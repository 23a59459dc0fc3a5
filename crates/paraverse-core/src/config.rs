//! Agent configuration validation and defaulting.
//!
//! The orchestrator is constructed with a fully-populated [`AgentConfig`];
//! callers supply an optional [`AgentConfigOverrides`] and validation fills
//! in the rest. Validation is a pure function with no side effects.

use crate::error::{ParaverseError, Result};
use serde::Deserialize;

/// Default model selection key.
pub const DEFAULT_MODEL: &str = "deepseek-chat";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default output token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Built-in system framing used when no override is supplied.
const BUILT_IN_SYSTEM_PROMPT: &str = "\
You are the Parallel Universe Agent, an advanced AI that helps users explore \
alternate versions of themselves across parallel universes.

Your capabilities include generating realistic parallel universe scenarios \
based on key life decisions, creating detailed personality profiles for \
alternate versions, analyzing timeline divergences and their consequences, \
simulating conversations with parallel selves, and comparing different life \
paths and outcomes.

Guidelines:
- Be creative but maintain logical consistency within each universe
- Consider butterfly effects: small changes can lead to big differences
- Respect the user's privacy and emotional boundaries
- Provide insights that are thought-provoking but not distressing
- Use scientific concepts of multiverse theory when appropriate and balance \
realism with imagination

Remember: each parallel universe represents a path not taken, a decision made \
differently, or a circumstance that changed. Help users explore these \
possibilities with empathy and wisdom.";

/// Optional partial configuration supplied by the caller.
///
/// Any field left as `None` falls back to the documented default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfigOverrides {
    /// Model selection key passed to the provider
    pub model: Option<String>,
    /// Sampling temperature, must lie in [0, 2]
    pub temperature: Option<f32>,
    /// Maximum output tokens per model call
    pub max_tokens: Option<u32>,
    /// Replacement for the built-in system framing prompt
    pub system_prompt: Option<String>,
}

/// Fully-populated agent behavior parameters.
///
/// Validated once at orchestrator construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Model selection key passed to the provider
    pub model: String,
    /// Sampling temperature in [0, 2]
    pub temperature: f32,
    /// Maximum output tokens per model call
    pub max_tokens: u32,
    system_prompt: Option<String>,
}

impl AgentConfig {
    /// Validates and defaults an optional partial configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the supplied temperature lies
    /// outside [0, 2].
    pub fn from_overrides(overrides: Option<AgentConfigOverrides>) -> Result<Self> {
        let overrides = overrides.unwrap_or_default();

        let temperature = overrides.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(0.0..=2.0).contains(&temperature) || !temperature.is_finite() {
            return Err(ParaverseError::invalid_configuration(format!(
                "temperature must be within [0, 2], got {temperature}"
            )));
        }

        Ok(Self {
            model: overrides.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            max_tokens: overrides.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            system_prompt: overrides.system_prompt,
        })
    }

    /// The effective system framing prompt.
    ///
    /// Returns the override when one was supplied, otherwise the built-in
    /// Parallel Universe Agent framing.
    pub fn system_prompt(&self) -> &str {
        self.system_prompt
            .as_deref()
            .unwrap_or(BUILT_IN_SYSTEM_PROMPT)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: None,
        }
    }
}
