//! Shared request-handler state.

use std::sync::Arc;

use paraverse_core::UniverseOrchestrator;

/// Application state passed by reference to every request handler.
///
/// Constructed once at startup; there is no ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<UniverseOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<UniverseOrchestrator>) -> Self {
        Self { orchestrator }
    }
}
