use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use std::time::Instant;

use crate::{
    error::ScreenerError,
    handlers::error_response,
    models::{
        screener::{ErrorResponse, ScreenerRequest, ScreenerResponse},
        stock::StockRecordView,
    },
    services::screener_params::parse_flat_params,
    AppState,
};

type HandlerResult = Result<Json<ScreenerResponse>, (StatusCode, Json<ErrorResponse>)>;

/// Handler for GET /api/screener
/// Flat query-string form, e.g. `?pe_max=30&sector=Energy&sort_field=market_cap`
pub async fn screen_from_query(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> HandlerResult {
    let started = Instant::now();
    tracing::info!("Screener query with {} parameter(s)", params.len());

    let request =
        parse_flat_params(&params).map_err(|e| error_response(e, Some(elapsed_ms(started))))?;

    run_screen(&state, request, started).await
}

/// Handler for POST /api/screener
/// Structured form: `{ "filters": {...}, "sort": {...}, "limit": 50, "offset": 0 }`
pub async fn screen_from_body(
    State(state): State<AppState>,
    body: Result<Json<ScreenerRequest>, JsonRejection>,
) -> HandlerResult {
    let started = Instant::now();

    let Json(request) = body.map_err(|rejection| {
        error_response(
            ScreenerError::validation(rejection.body_text()),
            Some(elapsed_ms(started)),
        )
    })?;
    tracing::info!("Screener query: {:?}", request);

    run_screen(&state, request, started).await
}

async fn run_screen(state: &AppState, request: ScreenerRequest, started: Instant) -> HandlerResult {
    let outcome = state
        .screener
        .screen(request)
        .await
        .map_err(|e| error_response(e, Some(elapsed_ms(started))))?;

    let response = ScreenerResponse {
        total: outcome.result.total,
        results: outcome.result.results.iter().map(StockRecordView::from).collect(),
        execution_time_ms: elapsed_ms(started),
        cached: outcome.cached,
    };

    tracing::info!(
        "Screen returned {} of {} matches in {}ms (cached: {})",
        response.results.len(),
        response.total,
        response.execution_time_ms,
        response.cached
    );

    Ok(Json(response))
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
