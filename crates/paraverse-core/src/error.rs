//! Error types for the Paraverse core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the universe orchestration layer.
///
/// This provides typed, structured error variants so callers (and the HTTP
/// boundary) can distinguish recoverable conditions from internal faults.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ParaverseError {
    /// Agent configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation referenced a universe id that is not in the store
    #[error("Universe not found: '{id}'")]
    UniverseNotFound { id: String },

    /// A comparison was requested with fewer than two resolvable universes
    #[error("Need at least 2 valid universes to compare, found {found}")]
    InsufficientUniverses { found: usize },

    /// A forced intent named a capability that is not registered
    #[error("Capability not available: '{name}'")]
    CapabilityUnavailable { name: String },

    /// Opaque upstream failure from the model provider
    #[error("Model service failure: {0}")]
    ModelService(String),

    /// The store reached a state an operation refuses to act on
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParaverseError {
    /// Creates a UniverseNotFound error.
    pub fn universe_not_found(id: impl Into<String>) -> Self {
        Self::UniverseNotFound { id: id.into() }
    }

    /// Creates a CapabilityUnavailable error.
    pub fn capability_unavailable(name: impl Into<String>) -> Self {
        Self::CapabilityUnavailable { name: name.into() }
    }

    /// Creates an InvalidConfiguration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Creates a ModelService error.
    pub fn model_service(message: impl Into<String>) -> Self {
        Self::ModelService(message.into())
    }

    /// Creates an InvalidState error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a UniverseNotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UniverseNotFound { .. })
    }

    /// Check if this is a ModelService error
    pub fn is_model_service(&self) -> bool {
        matches!(self, Self::ModelService(_))
    }
}

impl From<serde_json::Error> for ParaverseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ParaverseError>`.
pub type Result<T> = std::result::Result<T, ParaverseError>;
