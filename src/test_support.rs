//! Shared fixtures for unit tests

use crate::models::stock::{MacdSignal, StockRecord};

pub fn stock(ticker: &str, market_cap: f64, pe_ratio: Option<f64>) -> StockRecord {
    StockRecord {
        ticker: ticker.to_string(),
        name: format!("{} Inc.", ticker),
        price: 100.0,
        change: 0.0,
        change_percent: 0.0,
        market_cap,
        pe_ratio,
        dividend_yield: None,
        rsi: None,
        volume: 1_000_000,
        sector: "Information Technology".to_string(),
        fifty_two_week_high: 120.0,
        fifty_two_week_low: 80.0,
        above_fifty_day_ma: false,
        above_two_hundred_day_ma: false,
        macd_signal: MacdSignal::Neutral,
    }
}

/// AAPL, MSFT, GOOGL, AMZN (no P/E), NVDA. No sector is exactly "Technology".
pub fn five_stock_universe() -> Vec<StockRecord> {
    let mut googl = stock("GOOGL", 1.7e12, Some(25.8));
    googl.sector = "Communication Services".to_string();
    let mut amzn = stock("AMZN", 1.5e12, None);
    amzn.sector = "Consumer".to_string();

    vec![
        stock("AAPL", 2.8e12, Some(28.5)),
        stock("MSFT", 2.4e12, Some(35.2)),
        googl,
        amzn,
        stock("NVDA", 1.2e12, Some(62.1)),
    ]
}

pub fn tickers(records: &[StockRecord]) -> Vec<&str> {
    records.iter().map(|r| r.ticker.as_str()).collect()
}
