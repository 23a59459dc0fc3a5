//! Paraverse server entry point.
//!
//! Loads environment configuration, wires the orchestrator to the DeepSeek
//! provider and the in-memory store, and serves the HTTP surface. Any
//! unrecoverable startup error terminates the process; there is no
//! partially-initialized running mode.

mod error;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use paraverse_core::capability::default_providers;
use paraverse_core::{
    AgentConfig, AgentConfigOverrides, CapabilityRouter, HttpModelService, InMemoryUniverseStore,
    UniverseOrchestrator, UniverseStore,
};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

fn overrides_from_env() -> anyhow::Result<AgentConfigOverrides> {
    let temperature = match std::env::var("PARAVERSE_TEMPERATURE") {
        Ok(raw) => Some(
            raw.parse::<f32>()
                .context("PARAVERSE_TEMPERATURE is not a number")?,
        ),
        Err(_) => None,
    };
    let max_tokens = match std::env::var("PARAVERSE_MAX_TOKENS") {
        Ok(raw) => Some(
            raw.parse::<u32>()
                .context("PARAVERSE_MAX_TOKENS is not a positive integer")?,
        ),
        Err(_) => None,
    };

    Ok(AgentConfigOverrides {
        model: std::env::var("PARAVERSE_MODEL").ok(),
        temperature,
        max_tokens,
        system_prompt: std::env::var("PARAVERSE_SYSTEM_PROMPT").ok(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before any env::var lookups; absence is not an error.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AgentConfig::from_overrides(Some(overrides_from_env()?))
        .context("invalid agent configuration")?;
    let api_key =
        std::env::var("DEEPSEEK_API_KEY").context("DEEPSEEK_API_KEY must be set")?;

    let providers = default_providers();
    let specs = providers.iter().map(|p| p.spec()).collect();
    let model = Arc::new(HttpModelService::new(&config, api_key, specs));
    let mut router = CapabilityRouter::new(model);
    for provider in providers {
        router.register(provider);
    }

    let store: Arc<dyn UniverseStore> = Arc::new(InMemoryUniverseStore::new());
    let orchestrator = Arc::new(UniverseOrchestrator::new(config, store, router));
    tracing::info!("Universe orchestrator initialized");

    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|raw| raw.parse())
        .transpose()
        .context("PORT is not a valid port number")?
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let app = routes::build_router(AppState::new(orchestrator));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Paraverse server listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
