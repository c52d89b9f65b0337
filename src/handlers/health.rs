use axum::{extract::State, Json};

use crate::{models::health::HealthResponse, AppState};

/// Handler for GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = match state.universe.snapshot() {
        Some(snapshot) => HealthResponse {
            status: "ok".to_string(),
            universe_version: Some(snapshot.version),
            universe_size: snapshot.records.len(),
            refreshed_at: Some(snapshot.refreshed_at),
        },
        None => HealthResponse {
            status: "loading".to_string(),
            universe_version: None,
            universe_size: 0,
            refreshed_at: None,
        },
    };

    Json(response)
}
