#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use stockdash_backend::{
    handlers,
    models::stock::{MacdSignal, StockRecord},
    services::{
        query_cache::QueryCache, saved_screens::SavedScreenStore, screener::ScreenerService,
        templates::TemplateStore, universe::UniverseStore,
    },
    AppState,
};
use tower::ServiceExt;

pub fn stock(ticker: &str, sector: &str, market_cap: f64, pe_ratio: Option<f64>) -> StockRecord {
    StockRecord {
        ticker: ticker.to_string(),
        name: format!("{} Inc.", ticker),
        price: 100.0,
        change: 1.0,
        change_percent: 1.0,
        market_cap,
        pe_ratio,
        dividend_yield: None,
        rsi: Some(50.0),
        volume: 1_000_000,
        sector: sector.to_string(),
        fifty_two_week_high: 120.0,
        fifty_two_week_low: 80.0,
        above_fifty_day_ma: true,
        above_two_hundred_day_ma: false,
        macd_signal: MacdSignal::Neutral,
    }
}

/// Five well-known names; none has sector exactly "Technology"
pub fn five_stock_universe() -> Vec<StockRecord> {
    vec![
        stock("AAPL", "Information Technology", 2.8e12, Some(28.5)),
        stock("MSFT", "Information Technology", 2.4e12, Some(35.2)),
        stock("GOOGL", "Communication Services", 1.7e12, Some(25.8)),
        stock("AMZN", "Consumer", 1.5e12, None),
        stock("NVDA", "Information Technology", 1.2e12, Some(62.1)),
    ]
}

/// Build the full router around an optional starting universe
pub fn build_test_app(records: Option<Vec<StockRecord>>) -> (Router, UniverseStore) {
    let universe = UniverseStore::new();
    if let Some(records) = records {
        universe.replace(records).expect("fixture universe should be valid");
    }

    let state = AppState {
        screener: ScreenerService::new(
            universe.clone(),
            QueryCache::new(60, 100),
            TemplateStore::new(),
        ),
        universe: universe.clone(),
        saved_screens: SavedScreenStore::new(),
    };

    (handlers::router(state), universe)
}

/// Send a request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (u16, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn tickers(json: &Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ticker"].as_str().unwrap().to_string())
        .collect()
}
