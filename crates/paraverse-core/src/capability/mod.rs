//! Capability providers and routing.
//!
//! A capability is a named function the model may invoke (universe
//! generation, timeline generation, personality analysis, plus auxiliary
//! world-building helpers). The [`CapabilityRouter`] resolves a symbolic
//! [`Intent`] into a tool-choice policy and delegates the call to the model
//! service; it returns the raw response without interpreting its content.

mod providers;

pub use providers::{
    AnalyzePersonality, CheckUniverseConsistency, GenerateTimeline, GenerateUniverse,
    SuggestDivergenceEvents, default_providers,
};

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{ParaverseError, Result};
use crate::model::{ConversationTurn, ModelResponse, ModelService, ToolPolicy};

/// Stable capability names the orchestrator routes by.
pub mod names {
    /// Universe generation.
    pub const GENERATE_UNIVERSE: &str = "generate-universe";
    /// Timeline generation.
    pub const GENERATE_TIMELINE: &str = "generate-timeline";
    /// Personality analysis.
    pub const ANALYZE_PERSONALITY: &str = "analyze-personality";
}

/// Model-facing description of one capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    /// Stable symbolic name the capability is registered under.
    pub name: String,
    /// Human/model readable description of what the capability does.
    pub description: String,
    /// JSON schema of the invocation arguments.
    pub parameters: Value,
}

impl ToolSpec {
    /// Renders the spec in the provider's tool-invocation protocol.
    pub fn to_request_payload(&self) -> Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            },
        })
    }
}

/// A named external function the model may invoke.
///
/// Providers expose a capability description plus an invocation entry point
/// matching the model service's tool-invocation protocol.
pub trait CapabilityProvider: Send + Sync {
    /// Stable symbolic name this provider is registered under.
    fn name(&self) -> &str;

    /// Capability description shown to the model.
    fn description(&self) -> &str;

    /// JSON schema of the invocation arguments.
    fn parameters(&self) -> Value;

    /// The full model-facing spec.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Symbolic routing intent for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Let the model choose among all registered capabilities.
    AutoSelect,
    /// Force the named capability.
    Forced(String),
}

/// Resolves intents to capability providers and mediates tool choice.
pub struct CapabilityRouter {
    providers: HashMap<String, Arc<dyn CapabilityProvider>>,
    model: Arc<dyn ModelService>,
}

impl CapabilityRouter {
    /// Creates a router with no registered providers.
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self {
            providers: HashMap::new(),
            model,
        }
    }

    /// Creates a router with the built-in provider set registered.
    pub fn with_default_providers(model: Arc<dyn ModelService>) -> Self {
        let mut router = Self::new(model);
        for provider in default_providers() {
            router.register(provider);
        }
        router
    }

    /// Registers a provider under its stable name.
    pub fn register(&mut self, provider: Arc<dyn CapabilityProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    /// Whether a provider is registered under `name`.
    pub fn is_registered(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Model-facing specs of all registered providers.
    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        self.providers.values().map(|p| p.spec()).collect()
    }

    /// Routes one model call under the given intent.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityUnavailable` when a forced intent names an
    /// unregistered provider. Model failures propagate unmodified.
    pub async fn invoke(
        &self,
        intent: Intent,
        turns: &[ConversationTurn],
    ) -> Result<ModelResponse> {
        let policy = match intent {
            Intent::AutoSelect => ToolPolicy::Auto,
            Intent::Forced(name) => {
                if !self.is_registered(&name) {
                    return Err(ParaverseError::capability_unavailable(name));
                }
                ToolPolicy::Forced(name)
            }
        };

        self.model.run(turns, policy).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Records the policy of each call and replies with fixed text.
    struct RecordingModelService {
        policies: Mutex<Vec<ToolPolicy>>,
    }

    impl RecordingModelService {
        fn new() -> Self {
            Self {
                policies: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelService for RecordingModelService {
        async fn run(
            &self,
            _turns: &[ConversationTurn],
            policy: ToolPolicy,
        ) -> Result<ModelResponse> {
            self.policies.lock().await.push(policy);
            Ok(ModelResponse::text("ok"))
        }
    }

    #[tokio::test]
    async fn test_auto_select_uses_auto_policy() {
        let model = Arc::new(RecordingModelService::new());
        let router = CapabilityRouter::with_default_providers(model.clone());

        router
            .invoke(Intent::AutoSelect, &[ConversationTurn::user("hi")])
            .await
            .unwrap();

        assert_eq!(model.policies.lock().await.as_slice(), [ToolPolicy::Auto]);
    }

    #[tokio::test]
    async fn test_forced_intent_forces_named_capability() {
        let model = Arc::new(RecordingModelService::new());
        let router = CapabilityRouter::with_default_providers(model.clone());

        router
            .invoke(
                Intent::Forced(names::GENERATE_TIMELINE.to_string()),
                &[ConversationTurn::user("hi")],
            )
            .await
            .unwrap();

        assert_eq!(
            model.policies.lock().await.as_slice(),
            [ToolPolicy::Forced(names::GENERATE_TIMELINE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_forced_unknown_capability_is_rejected() {
        let model = Arc::new(RecordingModelService::new());
        let router = CapabilityRouter::with_default_providers(model.clone());

        let result = router
            .invoke(
                Intent::Forced("rewrite-history".to_string()),
                &[ConversationTurn::user("hi")],
            )
            .await;

        assert!(matches!(
            result,
            Err(ParaverseError::CapabilityUnavailable { .. })
        ));
        // The model must never see an unregistered forced intent.
        assert!(model.policies.lock().await.is_empty());
    }

    #[test]
    fn test_default_providers_cover_named_intents() {
        let specs = default_providers();
        let spec_names: Vec<_> = specs.iter().map(|p| p.name().to_string()).collect();
        for required in [
            names::GENERATE_UNIVERSE,
            names::GENERATE_TIMELINE,
            names::ANALYZE_PERSONALITY,
        ] {
            assert!(
                spec_names.iter().any(|n| n.as_str() == required),
                "missing {required}"
            );
        }
    }
}
