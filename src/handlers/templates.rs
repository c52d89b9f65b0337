use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ScreenerError,
    handlers::error_response,
    models::{
        screener::ErrorResponse,
        template::{TemplatesQuery, TemplatesResponse},
    },
    services::templates::ScreenerTemplate,
    AppState,
};

/// Handler for GET /api/screener/templates
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplatesQuery>,
) -> Json<TemplatesResponse> {
    let store = state.screener.templates();

    let templates: Vec<ScreenerTemplate> = match query.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            store.by_category(category).into_iter().cloned().collect()
        }
        _ => store.all().to_vec(),
    };

    Json(TemplatesResponse {
        total_count: templates.len(),
        templates,
    })
}

/// Handler for GET /api/screener/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScreenerTemplate>, (StatusCode, Json<ErrorResponse>)> {
    state
        .screener
        .templates()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            error_response(
                ScreenerError::NotFound(format!("Screener template '{}' not found", id)),
                None,
            )
        })
}
