use axum::{
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ScreenerError, models::screener::ErrorResponse, AppState};

pub mod health;
pub mod saved_screens;
pub mod screener;
pub mod templates;

/// All routes served by the backend
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/screener",
            get(screener::screen_from_query).post(screener::screen_from_body),
        )
        .route("/api/screener/templates", get(templates::list_templates))
        .route("/api/screener/templates/{id}", get(templates::get_template))
        .route(
            "/api/screener/saved",
            get(saved_screens::list_saved_screens).post(saved_screens::create_saved_screen),
        )
        .route("/api/screener/saved/{id}", delete(saved_screens::delete_saved_screen))
        .with_state(state)
}

/// Maps a service error onto the JSON error body. Unexpected failures are
/// logged in full and reported to the client generically.
pub(crate) fn error_response(
    err: ScreenerError,
    execution_time_ms: Option<u64>,
) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status_code();

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Request rejected ({}): {}", status, err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.public_message(),
            execution_time_ms,
        }),
    )
}
