//! Axum route handlers for the tower-profile HTTP server.
//!
//! # Routes
//!
//! - `GET  /health` — Returns `{"status": "ok", "version": "0.3.0", ...}`
//! - `POST /assess` — Accepts a `RawSelectionSet`, returns an `AssessResponse`
//! - `POST /reduce` — Applies one questionnaire action to a state

use std::sync::Arc;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::assessment::{reduce, Action, AssessmentState};
use crate::engine::{Engine, ProfileReport};
use crate::selection::RawSelectionSet;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Immutable engine shared by every request.
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Engine::builtin())
    }
}

/// Envelope returned by `POST /assess`.
///
/// The id and timestamp live here rather than in the report so that the
/// report itself stays a pure function of its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report: ProfileReport,
}

/// Body of `POST /reduce`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReduceRequest {
    #[serde(default)]
    pub state: AssessmentState,
    pub action: Action,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/assess", post(assess_handler))
        .route("/reduce", post(reduce_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "tower-profile",
    }))
}

/// POST /assess — normalize raw selections and run the engine.
async fn assess_handler(
    State(state): State<AppState>,
    Json(raw): Json<RawSelectionSet>,
) -> Json<AssessResponse> {
    let report = state.engine.assess_raw(&raw);
    let response = AssessResponse {
        assessment_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        report,
    };
    tracing::info!(
        assessment_id = %response.assessment_id,
        headline = %response.report.headline(),
        "assessment served"
    );
    Json(response)
}

/// POST /reduce — apply one questionnaire action.
async fn reduce_handler(Json(request): Json<ReduceRequest>) -> Json<AssessmentState> {
    Json(reduce(&request.state, &request.action))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
