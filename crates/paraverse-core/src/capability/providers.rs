//! Built-in capability providers.
//!
//! Three named capabilities back the orchestrator's forced intents, and two
//! auxiliary world-building helpers round out the pool the model may pick
//! from under auto tool choice.

use std::sync::Arc;

use serde_json::{Value, json};

use super::{CapabilityProvider, names};

/// Generates a full parallel-universe scenario from a base profile.
pub struct GenerateUniverse;

impl CapabilityProvider for GenerateUniverse {
    fn name(&self) -> &str {
        names::GENERATE_UNIVERSE
    }

    fn description(&self) -> &str {
        "Generate a realistic parallel universe scenario from a base profile \
         and an optional divergence point, maintaining internal consistency"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_profile": {
                    "type": "object",
                    "description": "Structured description of the real-world starting point"
                },
                "divergence_point": {
                    "type": "string",
                    "description": "The decision or event where this universe branches off"
                }
            },
            "required": ["base_profile"]
        })
    }
}

/// Produces a key-event timeline for an existing universe.
pub struct GenerateTimeline;

impl CapabilityProvider for GenerateTimeline {
    fn name(&self) -> &str {
        names::GENERATE_TIMELINE
    }

    fn description(&self) -> &str {
        "Generate a detailed timeline of key events for a parallel universe, \
         highlighting how each event differs from the base reality"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "universe": {
                    "type": "object",
                    "description": "The full serialized universe record"
                },
                "granularity": {
                    "type": "string",
                    "enum": ["major-events", "yearly", "monthly"],
                    "description": "How finely to slice the timeline"
                }
            },
            "required": ["universe"]
        })
    }
}

/// Builds a personality profile of the parallel self.
pub struct AnalyzePersonality;

impl CapabilityProvider for AnalyzePersonality {
    fn name(&self) -> &str {
        names::ANALYZE_PERSONALITY
    }

    fn description(&self) -> &str {
        "Analyze how the parallel self's personality, values and outlook \
         diverge from the base profile given their different life path"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "universe": {
                    "type": "object",
                    "description": "The full serialized universe record"
                }
            },
            "required": ["universe"]
        })
    }
}

/// Suggests plausible divergence events for a profile.
pub struct SuggestDivergenceEvents;

impl CapabilityProvider for SuggestDivergenceEvents {
    fn name(&self) -> &str {
        "suggest-divergence-events"
    }

    fn description(&self) -> &str {
        "Suggest plausible life decisions or events that would make \
         interesting divergence points for a given base profile"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_profile": {
                    "type": "object",
                    "description": "Structured description of the real-world starting point"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10,
                    "description": "How many suggestions to produce"
                }
            },
            "required": ["base_profile"]
        })
    }
}

/// Checks a generated universe for internal contradictions.
pub struct CheckUniverseConsistency;

impl CapabilityProvider for CheckUniverseConsistency {
    fn name(&self) -> &str {
        "check-universe-consistency"
    }

    fn description(&self) -> &str {
        "Review a generated universe for internal contradictions or broken \
         causal chains and list anything that needs reconciling"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "universe": {
                    "type": "object",
                    "description": "The full serialized universe record"
                }
            },
            "required": ["universe"]
        })
    }
}

/// The built-in provider set registered by default.
pub fn default_providers() -> Vec<Arc<dyn CapabilityProvider>> {
    vec![
        Arc::new(GenerateUniverse),
        Arc::new(GenerateTimeline),
        Arc::new(AnalyzePersonality),
        Arc::new(SuggestDivergenceEvents),
        Arc::new(CheckUniverseConsistency),
    ]
}
