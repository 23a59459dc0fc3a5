//! Universe orchestrator.
//!
//! Owns the universe lifecycle: it builds model requests from stored
//! universe state, routes them through the capability router, and folds
//! results back into the store. The orchestrator holds only identifiers
//! into stored state, never a mutable reference; every mutation goes
//! through the store's atomic API. It holds no lock across a suspension
//! point: reads snapshot state before suspending, writes land after.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::capability::{CapabilityRouter, Intent, names};
use crate::config::AgentConfig;
use crate::error::{ParaverseError, Result};
use crate::model::{ConversationTurn, ModelResponse};
use crate::prompt;
use crate::store::UniverseStore;
use crate::universe::{ConversationEntry, Universe};

/// Result envelope of a successful universe creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUniverse {
    /// Id of the newly stored universe.
    pub universe_id: String,
    /// The model's creation response.
    #[serde(flatten)]
    pub response: ModelResponse,
}

/// The core lifecycle coordinator for parallel universes.
///
/// Constructed once at startup with validated configuration and shared by
/// reference across request handlers; multiple independently-configured
/// instances can coexist.
pub struct UniverseOrchestrator {
    config: AgentConfig,
    store: Arc<dyn UniverseStore>,
    router: CapabilityRouter,
}

impl UniverseOrchestrator {
    /// Creates an orchestrator over the given store and router.
    pub fn new(config: AgentConfig, store: Arc<dyn UniverseStore>, router: CapabilityRouter) -> Self {
        Self {
            config,
            store,
            router,
        }
    }

    /// The validated configuration this orchestrator runs with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn system_turn(&self) -> ConversationTurn {
        ConversationTurn::system(self.config.system_prompt())
    }

    async fn load(&self, id: &str) -> Result<Universe> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ParaverseError::universe_not_found(id))
    }

    /// Generates a parallel universe and durably stores the full record.
    ///
    /// Returns the new id together with the model's creation response. The
    /// universe only becomes visible once the complete record (id, content,
    /// timestamp) has been written; a caller never observes a universe that
    /// was not durably created.
    ///
    /// # Errors
    ///
    /// Model failures propagate unmodified. A generated id that already
    /// exists in the store (vanishingly unlikely with UUIDv4) raises
    /// `InvalidState` instead of silently overwriting.
    pub async fn create_universe(
        &self,
        owner_id: &str,
        base_profile: serde_json::Value,
        divergence_point: Option<String>,
    ) -> Result<CreatedUniverse> {
        tracing::info!(owner_id, "Creating new universe");

        let request = prompt::creation_request(&base_profile, divergence_point.as_deref())?;
        let turns = [self.system_turn(), ConversationTurn::user(request)];
        let response = self.router.invoke(Intent::AutoSelect, &turns).await?;

        let universe_id = Uuid::new_v4().to_string();
        if self.store.get(&universe_id).await?.is_some() {
            return Err(ParaverseError::invalid_state(format!(
                "generated universe id '{universe_id}' already exists"
            )));
        }

        let universe = Universe {
            id: universe_id.clone(),
            owner_id: owner_id.to_string(),
            base_profile,
            divergence_point,
            generated_content: serde_json::to_value(&response)?,
            created_at: chrono::Utc::now().to_rfc3339(),
            conversation_log: Vec::new(),
        };
        self.store.put(universe).await?;

        tracing::info!(%universe_id, "Universe stored");
        Ok(CreatedUniverse {
            universe_id,
            response,
        })
    }

    /// Sends a universe's full state for open-ended elaboration.
    ///
    /// Read-only with respect to the store.
    ///
    /// # Errors
    ///
    /// Returns `UniverseNotFound` if the id is unknown.
    pub async fn explore_universe(&self, id: &str) -> Result<ModelResponse> {
        let universe = self.load(id).await?;
        let turns = [
            self.system_turn(),
            ConversationTurn::user(prompt::exploration_request(&universe)?),
        ];
        self.router.invoke(Intent::AutoSelect, &turns).await
    }

    /// Compares all resolvable universes among `ids`.
    ///
    /// Lookups fan out concurrently; ids that resolve to not-found (or whose
    /// lookup fails) are filtered rather than raised, since partial
    /// availability is a valid input shape here. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientUniverses` when fewer than two universes remain
    /// after filtering.
    pub async fn compare_universes(&self, ids: &[String]) -> Result<ModelResponse> {
        let lookups = ids.iter().map(|id| self.store.get(id));
        let universes: Vec<Universe> = futures::future::join_all(lookups)
            .await
            .into_iter()
            .filter_map(|result| result.ok().flatten())
            .collect();

        if universes.len() < 2 {
            return Err(ParaverseError::InsufficientUniverses {
                found: universes.len(),
            });
        }
        tracing::debug!(
            requested = ids.len(),
            resolved = universes.len(),
            "Comparing universes"
        );

        let turns = [
            self.system_turn(),
            ConversationTurn::user(prompt::comparison_request(&universes)?),
        ];
        self.router.invoke(Intent::AutoSelect, &turns).await
    }

    /// Converses with the universe's parallel self.
    ///
    /// The call is framed as role-played by the universe's persona plus the
    /// literal `message`. On success the exchange is appended to the
    /// universe's conversation log; a failed model call appends nothing.
    ///
    /// # Errors
    ///
    /// Returns `UniverseNotFound` if the id is unknown; model failures
    /// propagate unmodified.
    pub async fn chat_with_parallel_self(&self, id: &str, message: &str) -> Result<ModelResponse> {
        let universe = self.load(id).await?;
        let turns = [
            ConversationTurn::system(prompt::persona_framing(&universe)?),
            ConversationTurn::user(message),
        ];
        let response = self.router.invoke(Intent::AutoSelect, &turns).await?;

        self.store
            .append_conversation(id, ConversationEntry::now(message, &response.content))
            .await?;

        Ok(response)
    }

    /// Generates a timeline for the universe, forcing the timeline capability.
    ///
    /// Read-only with respect to the store.
    ///
    /// # Errors
    ///
    /// Returns `UniverseNotFound` if the id is unknown.
    pub async fn generate_timeline(&self, id: &str) -> Result<ModelResponse> {
        let universe = self.load(id).await?;
        let turns = [
            self.system_turn(),
            ConversationTurn::user(prompt::timeline_request(&universe)?),
        ];
        self.router
            .invoke(Intent::Forced(names::GENERATE_TIMELINE.to_string()), &turns)
            .await
    }

    /// Analyzes the parallel self's personality, forcing that capability.
    ///
    /// Read-only with respect to the store.
    ///
    /// # Errors
    ///
    /// Returns `UniverseNotFound` if the id is unknown.
    pub async fn analyze_personality(&self, id: &str) -> Result<ModelResponse> {
        let universe = self.load(id).await?;
        let turns = [
            self.system_turn(),
            ConversationTurn::user(prompt::personality_request(&universe)?),
        ];
        self.router
            .invoke(
                Intent::Forced(names::ANALYZE_PERSONALITY.to_string()),
                &turns,
            )
            .await
    }
}
