//! Paraverse core: universe orchestration and consistency layer.
//!
//! This crate turns independent model invocations into coherent,
//! addressable universes with a well-defined lifecycle, an append-only
//! conversation log per universe, and safe concurrent read/compare across
//! universes. The HTTP surface and the model provider are thin boundaries
//! around it.

pub mod capability;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod prompt;
pub mod store;
pub mod universe;

pub use capability::{CapabilityProvider, CapabilityRouter, Intent};
pub use config::{AgentConfig, AgentConfigOverrides};
pub use error::{ParaverseError, Result};
pub use model::{ConversationTurn, HttpModelService, ModelResponse, ModelService, ToolPolicy};
pub use orchestrator::{CreatedUniverse, UniverseOrchestrator};
pub use store::{InMemoryUniverseStore, UniverseStore};
pub use universe::{ConversationEntry, Universe};
