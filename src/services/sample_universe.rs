use crate::models::stock::{MacdSignal, StockRecord};

struct Row {
    ticker: &'static str,
    name: &'static str,
    sector: &'static str,
    price: f64,
    change: f64,
    market_cap: f64,
    pe_ratio: Option<f64>,
    dividend_yield: Option<f64>,
    rsi: Option<f64>,
    volume: u64,
    range_52w: (f64, f64),
    above_ma: (bool, bool),
    macd: MacdSignal,
}

const ROWS: &[Row] = &[
    Row {
        ticker: "AAPL",
        name: "Apple Inc.",
        sector: "Technology",
        price: 189.84,
        change: 1.12,
        market_cap: 2.95e12,
        pe_ratio: Some(29.4),
        dividend_yield: Some(0.51),
        rsi: Some(58.2),
        volume: 52_164_300,
        range_52w: (199.62, 164.08),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "MSFT",
        name: "Microsoft Corporation",
        sector: "Technology",
        price: 415.26,
        change: -2.35,
        market_cap: 3.09e12,
        pe_ratio: Some(36.1),
        dividend_yield: Some(0.72),
        rsi: Some(54.9),
        volume: 18_732_900,
        range_52w: (430.82, 309.45),
        above_ma: (true, true),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "NVDA",
        name: "NVIDIA Corporation",
        sector: "Technology",
        price: 875.28,
        change: 18.44,
        market_cap: 2.19e12,
        pe_ratio: Some(73.5),
        dividend_yield: Some(0.02),
        rsi: Some(71.3),
        volume: 41_205_600,
        range_52w: (974.00, 262.20),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "GOOGL",
        name: "Alphabet Inc.",
        sector: "Technology",
        price: 152.19,
        change: 0.87,
        market_cap: 1.89e12,
        pe_ratio: Some(25.8),
        dividend_yield: None,
        rsi: Some(49.6),
        volume: 24_987_100,
        range_52w: (155.20, 102.21),
        above_ma: (true, true),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "AMZN",
        name: "Amazon.com, Inc.",
        sector: "Consumer",
        price: 178.22,
        change: -1.03,
        market_cap: 1.85e12,
        pe_ratio: Some(61.2),
        dividend_yield: None,
        rsi: Some(46.8),
        volume: 37_442_800,
        range_52w: (189.77, 101.15),
        above_ma: (false, true),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "TSLA",
        name: "Tesla, Inc.",
        sector: "Consumer",
        price: 171.05,
        change: -4.88,
        market_cap: 5.45e11,
        pe_ratio: Some(43.7),
        dividend_yield: None,
        rsi: Some(28.4),
        volume: 98_112_400,
        range_52w: (299.29, 152.37),
        above_ma: (false, false),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "JPM",
        name: "JPMorgan Chase & Co.",
        sector: "Finance",
        price: 196.62,
        change: 1.54,
        market_cap: 5.65e11,
        pe_ratio: Some(11.9),
        dividend_yield: Some(2.34),
        rsi: Some(63.1),
        volume: 9_204_500,
        range_52w: (200.94, 135.19),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "BAC",
        name: "Bank of America Corporation",
        sector: "Finance",
        price: 37.41,
        change: 0.22,
        market_cap: 2.95e11,
        pe_ratio: Some(12.6),
        dividend_yield: Some(2.57),
        rsi: Some(59.0),
        volume: 35_870_200,
        range_52w: (38.35, 24.96),
        above_ma: (true, true),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "XOM",
        name: "Exxon Mobil Corporation",
        sector: "Energy",
        price: 113.87,
        change: -0.64,
        market_cap: 4.52e11,
        pe_ratio: Some(13.7),
        dividend_yield: Some(3.34),
        rsi: Some(44.2),
        volume: 16_553_000,
        range_52w: (123.75, 95.77),
        above_ma: (false, true),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "CVX",
        name: "Chevron Corporation",
        sector: "Energy",
        price: 155.02,
        change: 0.41,
        market_cap: 2.89e11,
        pe_ratio: Some(14.5),
        dividend_yield: Some(4.21),
        rsi: Some(51.7),
        volume: 7_932_100,
        range_52w: (171.70, 139.62),
        above_ma: (true, false),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "JNJ",
        name: "Johnson & Johnson",
        sector: "Healthcare",
        price: 152.64,
        change: -0.18,
        market_cap: 3.67e11,
        pe_ratio: Some(9.6),
        dividend_yield: Some(3.12),
        rsi: Some(38.5),
        volume: 6_420_300,
        range_52w: (175.97, 143.13),
        above_ma: (false, false),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "PFE",
        name: "Pfizer Inc.",
        sector: "Healthcare",
        price: 27.33,
        change: -0.29,
        market_cap: 1.55e11,
        pe_ratio: None,
        dividend_yield: Some(6.15),
        rsi: Some(26.9),
        volume: 42_118_700,
        range_52w: (40.37, 25.20),
        above_ma: (false, false),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "UNH",
        name: "UnitedHealth Group Incorporated",
        sector: "Healthcare",
        price: 492.17,
        change: 3.85,
        market_cap: 4.54e11,
        pe_ratio: Some(21.3),
        dividend_yield: Some(1.53),
        rsi: Some(55.5),
        volume: 3_205_900,
        range_52w: (554.70, 436.38),
        above_ma: (true, false),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "CAT",
        name: "Caterpillar Inc.",
        sector: "Industrials",
        price: 358.90,
        change: 2.77,
        market_cap: 1.79e11,
        pe_ratio: Some(17.2),
        dividend_yield: Some(1.45),
        rsi: Some(67.8),
        volume: 2_874_400,
        range_52w: (382.01, 204.04),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "GE",
        name: "General Electric Company",
        sector: "Industrials",
        price: 161.45,
        change: 1.09,
        market_cap: 1.76e11,
        pe_ratio: Some(52.8),
        dividend_yield: Some(0.2),
        rsi: None,
        volume: 5_611_000,
        range_52w: (170.80, 84.42),
        above_ma: (true, true),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "PLD",
        name: "Prologis, Inc.",
        sector: "Real Estate",
        price: 126.38,
        change: -1.41,
        market_cap: 1.17e11,
        pe_ratio: Some(38.9),
        dividend_yield: Some(3.04),
        rsi: Some(33.7),
        volume: 3_980_200,
        range_52w: (137.52, 96.64),
        above_ma: (false, false),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "O",
        name: "Realty Income Corporation",
        sector: "Real Estate",
        price: 53.14,
        change: 0.12,
        market_cap: 4.62e10,
        pe_ratio: Some(49.1),
        dividend_yield: Some(5.79),
        rsi: Some(47.0),
        volume: 5_102_700,
        range_52w: (64.88, 45.03),
        above_ma: (true, false),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "NEE",
        name: "NextEra Energy, Inc.",
        sector: "Utilities",
        price: 64.71,
        change: 0.58,
        market_cap: 1.33e11,
        pe_ratio: Some(17.9),
        dividend_yield: Some(3.18),
        rsi: Some(61.4),
        volume: 11_387_500,
        range_52w: (79.78, 47.15),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
    Row {
        ticker: "DUK",
        name: "Duke Energy Corporation",
        sector: "Utilities",
        price: 96.77,
        change: -0.33,
        market_cap: 7.46e10,
        pe_ratio: Some(19.4),
        dividend_yield: Some(4.24),
        rsi: Some(52.2),
        volume: 3_116_800,
        range_52w: (100.36, 83.06),
        above_ma: (true, true),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "SOFI",
        name: "SoFi Technologies, Inc.",
        sector: "Finance",
        price: 7.29,
        change: -0.21,
        market_cap: 7.7e9,
        pe_ratio: None,
        dividend_yield: None,
        rsi: Some(35.1),
        volume: 48_905_300,
        range_52w: (11.70, 4.45),
        above_ma: (false, false),
        macd: MacdSignal::Bearish,
    },
    Row {
        ticker: "PLUG",
        name: "Plug Power Inc.",
        sector: "Industrials",
        price: 3.41,
        change: -0.09,
        market_cap: 2.1e9,
        pe_ratio: None,
        dividend_yield: None,
        rsi: None,
        volume: 31_455_900,
        range_52w: (12.60, 2.61),
        above_ma: (false, false),
        macd: MacdSignal::Neutral,
    },
    Row {
        ticker: "CLSK",
        name: "CleanSpark, Inc.",
        sector: "Technology",
        price: 17.85,
        change: 1.36,
        market_cap: 1.2e9,
        pe_ratio: None,
        dividend_yield: None,
        rsi: Some(74.6),
        volume: 27_004_100,
        range_52w: (24.72, 3.38),
        above_ma: (true, true),
        macd: MacdSignal::Bullish,
    },
];

/// Snapshot of well-known US listings, good enough to exercise every filter.
pub fn sample_records() -> Vec<StockRecord> {
    ROWS.iter()
        .map(|row| {
            let previous = row.price - row.change;
            StockRecord {
                ticker: row.ticker.to_string(),
                name: row.name.to_string(),
                price: row.price,
                change: row.change,
                change_percent: ((row.change / previous) * 10_000.0).round() / 100.0,
                market_cap: row.market_cap,
                pe_ratio: row.pe_ratio,
                dividend_yield: row.dividend_yield,
                rsi: row.rsi,
                volume: row.volume,
                sector: row.sector.to_string(),
                fifty_two_week_high: row.range_52w.0,
                fifty_two_week_low: row.range_52w.1,
                above_fifty_day_ma: row.above_ma.0,
                above_two_hundred_day_ma: row.above_ma.1,
                macd_signal: row.macd,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::universe::UniverseStore;

    #[test]
    fn test_sample_is_a_valid_snapshot() {
        let store = UniverseStore::new();
        let snapshot = store.replace(sample_records()).unwrap();
        assert_eq!(snapshot.records.len(), ROWS.len());
    }

    #[test]
    fn test_change_percent_is_derived() {
        let records = sample_records();
        let aapl = records.iter().find(|r| r.ticker == "AAPL").unwrap();
        assert!((aapl.change_percent - 0.59).abs() < 0.01);
    }
}
