mod common;

use serde_json::json;

use crate::common::{build_test_app, five_stock_universe, get, post_json, send, stock, tickers};

/// P/E ceiling excludes both expensive names and the one without earnings
#[tokio::test]
async fn test_pe_max_filter() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json("/api/screener", json!({ "filters": { "pe_ratio": { "max": 30 } } })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["total"], 2);
    assert_eq!(tickers(&json), vec!["AAPL", "GOOGL"]);
    assert_eq!(json["cached"], false);
    assert!(json["execution_time_ms"].is_u64());
}

#[tokio::test]
async fn test_sort_by_market_cap_desc_with_limit() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json(
            "/api/screener",
            json!({
                "filters": {},
                "sort": { "field": "market_cap", "order": "desc" },
                "limit": 3,
                "offset": 0
            }),
        ),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["total"], 5);
    assert_eq!(tickers(&json), vec!["AAPL", "MSFT", "GOOGL"]);
}

#[tokio::test]
async fn test_sort_by_pe_asc_puts_missing_last() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json("/api/screener", json!({ "sort": { "field": "pe_ratio", "order": "asc" } })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(tickers(&json), vec!["GOOGL", "AAPL", "MSFT", "NVDA", "AMZN"]);
    assert!(json["results"][4]["pe_ratio"].is_null());
}

#[tokio::test]
async fn test_sector_with_no_exact_match() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json("/api/screener", json!({ "filters": { "sector": ["Technology"] } })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["total"], 0);
    assert_eq!(json["results"], json!([]));
}

#[tokio::test]
async fn test_limit_above_ceiling_is_rejected() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(&app, post_json("/api/screener", json!({ "limit": 501 }))).await;
    assert_eq!(status, 400);
    assert!(json["error"].as_str().unwrap().contains("500"));
    assert!(json.get("results").is_none());
    assert!(json["execution_time_ms"].is_u64());

    let (status, _) = send(&app, get("/api/screener?limit=501")).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_negative_pagination_is_rejected() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, _) = send(&app, post_json("/api/screener", json!({ "offset": -1 }))).await;
    assert_eq!(status, 400);

    let (status, _) = send(&app, get("/api/screener?limit=-3")).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_invalid_sort_field_names_the_field() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json("/api/screener", json!({ "sort": { "field": "beta" } })),
    )
    .await;

    assert_eq!(status, 400);
    assert!(json["error"].as_str().unwrap().contains("beta"));
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        post_json("/api/screener", json!({ "filters": { "pe_ratio": { "max": "cheap" } } })),
    )
    .await;
    assert_eq!(status, 400);
    assert!(json["error"].is_string());

    let (status, _) = send(
        &app,
        post_json("/api/screener", json!({ "filters": { "beta": { "max": 1 } } })),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_offset_past_total() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(&app, post_json("/api/screener", json!({ "offset": 10 }))).await;
    assert_eq!(status, 200);
    assert_eq!(json["total"], 5);
    assert_eq!(json["results"], json!([]));
}

#[tokio::test]
async fn test_flat_query_string() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        get(concat!(
            "/api/screener?market_cap_min=1500000000000&pe_max=40",
            "&sort_field=pe_ratio&sort_order=desc"
        )),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["total"], 3);
    assert_eq!(tickers(&json), vec!["MSFT", "AAPL", "GOOGL"]);
}

#[tokio::test]
async fn test_flat_query_sector_list() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(
        &app,
        get("/api/screener?sector=Consumer,Communication%20Services&sort_field=ticker"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(tickers(&json), vec!["AMZN", "GOOGL"]);
}

#[tokio::test]
async fn test_flat_query_rejects_unknown_and_unparseable() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (status, json) = send(&app, get("/api/screener?pe_max=30&beta_max=1")).await;
    assert_eq!(status, 400);
    assert!(json["error"].as_str().unwrap().contains("beta_max"));

    let (status, json) = send(&app, get("/api/screener?pe_max=thirty")).await;
    assert_eq!(status, 400);
    assert!(json["error"].as_str().unwrap().contains("pe_max"));
}

#[tokio::test]
async fn test_response_uses_snake_case_view() {
    let (app, _) = build_test_app(Some(five_stock_universe()));

    let (_, json) = send(&app, get("/api/screener?limit=1")).await;
    let row = &json["results"][0];

    for key in [
        "ticker",
        "name",
        "price",
        "change",
        "change_percent",
        "market_cap",
        "pe_ratio",
        "dividend_yield",
        "rsi",
        "volume",
        "sector",
        "fifty_two_week_high",
        "fifty_two_week_low",
        "above_50ma",
        "above_200ma",
        "macd_signal",
    ] {
        assert!(row.get(key).is_some(), "missing {}", key);
    }
    assert!(row.get("marketCap").is_none());
    assert_eq!(row["macd_signal"], "neutral");
}

#[tokio::test]
async fn test_repeat_query_is_served_from_cache() {
    let (app, _) = build_test_app(Some(five_stock_universe()));
    let body = json!({ "filters": { "pe_ratio": { "max": 30 } }, "sort": { "field": "ticker" } });

    let (_, first) = send(&app, post_json("/api/screener", body.clone())).await;
    let (_, second) = send(&app, post_json("/api/screener", body)).await;

    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(first["results"], second["results"]);
    assert_eq!(first["total"], second["total"]);
}

#[tokio::test]
async fn test_new_snapshot_is_visible_immediately() {
    let (app, universe) = build_test_app(Some(five_stock_universe()));
    let (_, before) = send(&app, get("/api/screener")).await;
    assert_eq!(before["total"], 5);

    universe
        .replace(vec![stock("XOM", "Energy", 4.5e11, Some(13.7))])
        .unwrap();

    let (_, after) = send(&app, get("/api/screener")).await;
    assert_eq!(after["total"], 1);
    assert_eq!(after["cached"], false);
    assert_eq!(tickers(&after), vec!["XOM"]);
}

#[tokio::test]
async fn test_unavailable_before_first_snapshot() {
    let (app, _) = build_test_app(None);

    let (status, json) = send(&app, get("/api/screener")).await;
    assert_eq!(status, 503);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_empty_universe_is_not_an_error() {
    let (app, _) = build_test_app(Some(vec![]));

    let (status, json) = send(&app, get("/api/screener")).await;
    assert_eq!(status, 200);
    assert_eq!(json["total"], 0);
    assert_eq!(json["results"], json!([]));
}

#[tokio::test]
async fn test_template_applied_and_overridden() {
    let mut universe = five_stock_universe();
    universe[0].rsi = Some(25.0);
    universe[3].rsi = Some(29.0);
    let (app, _) = build_test_app(Some(universe));

    let (status, json) = send(&app, get("/api/screener?template=oversold")).await;
    assert_eq!(status, 200);
    assert_eq!(tickers(&json), vec!["AAPL", "AMZN"]);

    let (status, json) = send(
        &app,
        post_json(
            "/api/screener",
            json!({ "template": "oversold", "filters": { "rsi": { "max": 26 } } }),
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(tickers(&json), vec!["AAPL"]);

    let (status, _) = send(&app, get("/api/screener?template=unknown")).await;
    assert_eq!(status, 400);
}
