//! HTTP route table and handlers.
//!
//! Thin JSON adapters over the orchestrator's six operations plus a health
//! probe. Handlers validate the request shape and delegate; all domain
//! failure semantics live in the core.

use axum::Json;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use paraverse_core::{CreatedUniverse, ModelResponse};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/universes", post(create_universe))
        .route("/api/universes/compare", post(compare_universes))
        .route("/api/universes/:id/explore", get(explore_universe))
        .route("/api/universes/:id/chat", post(chat))
        .route("/api/universes/:id/timeline", get(generate_timeline))
        .route("/api/universes/:id/personality", get(analyze_personality))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health - liveness check.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "agent": "paraverse",
    }))
}

#[derive(Deserialize)]
struct CreateUniverseRequest {
    owner_id: String,
    base_profile: Value,
    #[serde(default)]
    divergence_point: Option<String>,
}

/// POST /api/universes - generate and store a new universe.
async fn create_universe(
    State(state): State<AppState>,
    Json(req): Json<CreateUniverseRequest>,
) -> Result<Json<CreatedUniverse>, ApiError> {
    let created = state
        .orchestrator
        .create_universe(&req.owner_id, req.base_profile, req.divergence_point)
        .await?;
    Ok(Json(created))
}

/// GET /api/universes/:id/explore - open-ended elaboration.
async fn explore_universe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    Ok(Json(state.orchestrator.explore_universe(&id).await?))
}

#[derive(Deserialize)]
struct CompareRequest {
    universe_ids: Vec<String>,
}

/// POST /api/universes/compare - compare resolvable universes.
async fn compare_universes(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    Ok(Json(
        state.orchestrator.compare_universes(&req.universe_ids).await?,
    ))
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

/// POST /api/universes/:id/chat - converse with the parallel self.
async fn chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    Ok(Json(
        state
            .orchestrator
            .chat_with_parallel_self(&id, &req.message)
            .await?,
    ))
}

/// GET /api/universes/:id/timeline - forced timeline capability.
async fn generate_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    Ok(Json(state.orchestrator.generate_timeline(&id).await?))
}

/// GET /api/universes/:id/personality - forced personality capability.
async fn analyze_personality(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    Ok(Json(state.orchestrator.analyze_personality(&id).await?))
}
