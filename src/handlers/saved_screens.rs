use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::ScreenerError,
    handlers::error_response,
    models::{saved_screen::SavedScreensResponse, screener::ErrorResponse},
    services::saved_screens::{CreateSavedScreenRequest, SavedScreen},
    AppState,
};

/// Header carrying the caller identity resolved by the upstream auth layer
pub const USER_ID_HEADER: &str = "x-user-id";

type ApiError = (StatusCode, Json<ErrorResponse>);

fn caller_id(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            error_response(
                ScreenerError::Unauthorized(format!("missing {} header", USER_ID_HEADER)),
                None,
            )
        })
}

/// Handler for GET /api/screener/saved
pub async fn list_saved_screens(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SavedScreensResponse>, ApiError> {
    let user_id = caller_id(&headers)?;
    let screens = state.saved_screens.list(&user_id);

    Ok(Json(SavedScreensResponse {
        total_count: screens.len(),
        screens,
    }))
}

/// Handler for POST /api/screener/saved
pub async fn create_saved_screen(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateSavedScreenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedScreen>), ApiError> {
    let user_id = caller_id(&headers)?;
    let Json(request) = body.map_err(|rejection| {
        error_response(ScreenerError::validation(rejection.body_text()), None)
    })?;

    let screen = state
        .saved_screens
        .create(&user_id, request)
        .map_err(|e| error_response(e, None))?;

    Ok((StatusCode::CREATED, Json(screen)))
}

/// Handler for DELETE /api/screener/saved/{id}
pub async fn delete_saved_screen(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user_id = caller_id(&headers)?;
    let id = Uuid::parse_str(&id).map_err(|_| {
        error_response(
            ScreenerError::validation(format!("Invalid saved screen id: '{}'", id)),
            None,
        )
    })?;

    state
        .saved_screens
        .delete(&user_id, id)
        .map_err(|e| error_response(e, None))?;

    Ok(StatusCode::NO_CONTENT)
}
