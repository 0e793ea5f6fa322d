// src/handlers/catalog.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

/// Lists the available tracks with their tag sets.
pub async fn list_tracks(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.tracks().to_vec())
}

/// Lists the full module catalog.
pub async fn list_modules(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.modules().to_vec())
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
