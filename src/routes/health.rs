//! Health check endpoint
//!
//! Reports liveness plus a summary of the loaded model artifacts, so a
//! probe can tell a serving instance from a misconfigured one.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::crops::NUM_CROPS;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct ModelSummary {
    /// Number of crop classes the label table covers
    pub crops: usize,
    /// Node count of the loaded classifier tree
    pub classifier_nodes: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub model: ModelSummary,
}

/// GET /health - Health check with loaded-model summary
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: ModelSummary {
            crops: NUM_CROPS,
            classifier_nodes: state.classifier.nodes.len(),
        },
    })
}
