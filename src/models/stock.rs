use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// MACD momentum classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacdSignal {
    Bullish,
    Bearish,
    Neutral,
}

impl MacdSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacdSignal::Bullish => "bullish",
            MacdSignal::Bearish => "bearish",
            MacdSignal::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacdSignal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bullish" => Ok(MacdSignal::Bullish),
            "bearish" => Ok(MacdSignal::Bearish),
            "neutral" => Ok(MacdSignal::Neutral),
            other => Err(format!(
                "Invalid macd_signal: '{}'. Expected bullish, bearish or neutral",
                other
            )),
        }
    }
}

/// One row of the queryable universe, as supplied by the universe provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(deserialize_with = "deserialize_volume")]
    pub volume: u64,
    pub sector: String,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    #[serde(rename = "aboveFiftyDayMA")]
    pub above_fifty_day_ma: bool,
    #[serde(rename = "aboveTwoHundredDayMA")]
    pub above_two_hundred_day_ma: bool,
    pub macd_signal: MacdSignal,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVolume {
    Whole(u64),
    Float(f64),
}

/// Some feeds send share volume as a float (`5.2e7`). Accepted when it is a
/// non-negative whole number.
fn deserialize_volume<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawVolume::deserialize(deserializer)? {
        RawVolume::Whole(v) => Ok(v),
        RawVolume::Float(v) if v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => {
            Ok(v as u64)
        }
        RawVolume::Float(v) => Err(de::Error::custom(format!(
            "volume must be a non-negative whole number, got: {}",
            v
        ))),
    }
}

/// Wire shape of a stock row in screener responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecordView {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub rsi: Option<f64>,
    pub volume: u64,
    pub sector: String,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    pub above_50ma: bool,
    pub above_200ma: bool,
    pub macd_signal: MacdSignal,
}

impl From<&StockRecord> for StockRecordView {
    fn from(record: &StockRecord) -> Self {
        StockRecordView {
            ticker: record.ticker.clone(),
            name: record.name.clone(),
            price: record.price,
            change: record.change,
            change_percent: record.change_percent,
            market_cap: record.market_cap,
            pe_ratio: record.pe_ratio,
            dividend_yield: record.dividend_yield,
            rsi: record.rsi,
            volume: record.volume,
            sector: record.sector.clone(),
            fifty_two_week_high: record.fifty_two_week_high,
            fifty_two_week_low: record.fifty_two_week_low,
            above_50ma: record.above_fifty_day_ma,
            above_200ma: record.above_two_hundred_day_ma,
            macd_signal: record.macd_signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StockRecord {
        StockRecord {
            ticker: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price: 189.5,
            change: 1.25,
            change_percent: 0.66,
            market_cap: 2.8e12,
            pe_ratio: Some(28.5),
            dividend_yield: None,
            rsi: Some(55.0),
            volume: 52_000_000,
            sector: "Information Technology".to_string(),
            fifty_two_week_high: 199.6,
            fifty_two_week_low: 164.1,
            above_fifty_day_ma: true,
            above_two_hundred_day_ma: false,
            macd_signal: MacdSignal::Bullish,
        }
    }

    #[test]
    fn test_record_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["changePercent"], json!(0.66));
        assert_eq!(json["marketCap"], json!(2.8e12));
        assert_eq!(json["peRatio"], json!(28.5));
        assert_eq!(json["fiftyTwoWeekHigh"], json!(199.6));
        assert_eq!(json["aboveFiftyDayMA"], json!(true));
        assert_eq!(json["aboveTwoHundredDayMA"], json!(false));
        assert_eq!(json["macdSignal"], json!("bullish"));
    }

    #[test]
    fn test_volume_accepts_integral_floats() {
        let mut raw = serde_json::to_value(sample()).unwrap();
        raw["volume"] = json!(5.2e7);
        let record: StockRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.volume, 52_000_000);

        raw["volume"] = json!(1234.5);
        assert!(serde_json::from_value::<StockRecord>(raw.clone()).is_err());

        raw["volume"] = json!(-10.0);
        assert!(serde_json::from_value::<StockRecord>(raw).is_err());
    }

    #[test]
    fn test_record_nullable_fields_default_to_none() {
        let raw = json!({
            "ticker": "AMZN",
            "name": "Amazon.com Inc.",
            "price": 145.0,
            "change": -0.5,
            "changePercent": -0.34,
            "marketCap": 1.5e12,
            "volume": 40000000,
            "sector": "Consumer",
            "fiftyTwoWeekHigh": 150.0,
            "fiftyTwoWeekLow": 100.0,
            "aboveFiftyDayMA": false,
            "aboveTwoHundredDayMA": true,
            "macdSignal": "neutral"
        });
        let record: StockRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.pe_ratio, None);
        assert_eq!(record.dividend_yield, None);
        assert_eq!(record.rsi, None);
    }

    #[test]
    fn test_view_mapping_field_for_field() {
        let view = StockRecordView::from(&sample());
        let json = serde_json::to_value(&view).unwrap();

        let expected = json!({
            "ticker": "AAPL",
            "name": "Apple Inc.",
            "price": 189.5,
            "change": 1.25,
            "change_percent": 0.66,
            "market_cap": 2.8e12,
            "pe_ratio": 28.5,
            "dividend_yield": null,
            "rsi": 55.0,
            "volume": 52000000,
            "sector": "Information Technology",
            "fifty_two_week_high": 199.6,
            "fifty_two_week_low": 164.1,
            "above_50ma": true,
            "above_200ma": false,
            "macd_signal": "bullish"
        });
        assert_eq!(json, expected);

        let keys = json.as_object().map(|o| o.len()).unwrap_or(0);
        assert_eq!(keys, 16, "view must carry every record field exactly once");
        assert!(json.get("changePercent").is_none());
    }

    #[test]
    fn test_macd_signal_from_str() {
        assert_eq!("Bullish".parse::<MacdSignal>().unwrap(), MacdSignal::Bullish);
        assert_eq!(" bearish ".parse::<MacdSignal>().unwrap(), MacdSignal::Bearish);
        assert!("sideways".parse::<MacdSignal>().is_err());
    }
}
