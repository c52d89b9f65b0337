//! Flat query-string form of a screener request
//!
//! `GET /api/screener?pe_max=30&sector=Energy,Utilities&sort_field=market_cap`
//! is parsed into the same [`ScreenerRequest`] the JSON endpoint accepts.
//! Unknown keys and unparseable values are rejected here, before any
//! filtering happens.

use crate::error::{Result, ScreenerError};
use crate::models::screener::{FilterSpec, RangeFilter, ScreenerRequest, SortRequest};
use crate::models::stock::MacdSignal;

pub const ACCEPTED_KEYS: [&str; 21] = [
    "market_cap_min",
    "market_cap_max",
    "pe_min",
    "pe_max",
    "price_min",
    "price_max",
    "dividend_yield_min",
    "dividend_yield_max",
    "volume_min",
    "volume_max",
    "rsi_min",
    "rsi_max",
    "sector",
    "above_50ma",
    "above_200ma",
    "macd_signal",
    "sort_field",
    "sort_order",
    "limit",
    "offset",
    "template",
];

pub fn parse_flat_params(params: &[(String, String)]) -> Result<ScreenerRequest> {
    let mut unknown: Vec<&str> = params
        .iter()
        .map(|(k, _)| k.as_str())
        .filter(|k| !ACCEPTED_KEYS.contains(k))
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        unknown.dedup();
        return Err(ScreenerError::validation(format!(
            "Unknown query parameter(s): {}",
            unknown.join(", ")
        )));
    }

    // Last occurrence wins; empty values count as absent
    let get = |key: &str| {
        params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    };

    let range = |prefix: &str| -> Result<Option<RangeFilter>> {
        let min = get(&format!("{}_min", prefix))
            .map(|v| parse_number(prefix, "min", v))
            .transpose()?;
        let max = get(&format!("{}_max", prefix))
            .map(|v| parse_number(prefix, "max", v))
            .transpose()?;
        Ok((min.is_some() || max.is_some()).then(|| RangeFilter::new(min, max)))
    };

    let sector = get("sector").map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
    });

    let macd_signal = get("macd_signal")
        .map(|v| v.parse::<MacdSignal>().map_err(ScreenerError::Validation))
        .transpose()?;

    let filters = FilterSpec {
        market_cap: range("market_cap")?,
        pe_ratio: range("pe")?,
        price: range("price")?,
        dividend_yield: range("dividend_yield")?,
        volume: range("volume")?,
        rsi: range("rsi")?,
        sector,
        above_50ma: get("above_50ma").map(|v| parse_bool("above_50ma", v)).transpose()?,
        above_200ma: get("above_200ma").map(|v| parse_bool("above_200ma", v)).transpose()?,
        macd_signal,
    };

    let sort = match (get("sort_field"), get("sort_order")) {
        (Some(field), order) => Some(SortRequest {
            field: field.to_string(),
            order: order.map(str::to_string),
        }),
        (None, Some(_)) => {
            return Err(ScreenerError::validation("sort_order requires sort_field"));
        }
        (None, None) => None,
    };

    Ok(ScreenerRequest {
        filters,
        sort,
        limit: get("limit").map(|v| parse_integer("limit", v)).transpose()?,
        offset: get("offset").map(|v| parse_integer("offset", v)).transpose()?,
        template: get("template").map(str::to_string),
    })
}

fn parse_number(prefix: &str, side: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ScreenerError::validation(format!(
            "Invalid number for {}_{}: '{}'",
            prefix, side, raw
        ))),
    }
}

fn parse_integer(key: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| ScreenerError::validation(format!("Invalid integer for {}: '{}'", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ScreenerError::validation(format!(
            "Invalid boolean for {}: '{}'. Expected true or false",
            key, raw
        ))),
    }
}
