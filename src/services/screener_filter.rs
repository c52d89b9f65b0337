//! Filter stage of the screener engine

use crate::models::screener::FilterSpec;
use crate::models::stock::StockRecord;

/// True when `record` passes every clause present in `filters`.
pub fn matches(record: &StockRecord, filters: &FilterSpec) -> bool {
    let ranged = [
        (filters.market_cap.as_ref(), Some(record.market_cap)),
        (filters.pe_ratio.as_ref(), record.pe_ratio),
        (filters.price.as_ref(), Some(record.price)),
        (filters.dividend_yield.as_ref(), record.dividend_yield),
        (filters.volume.as_ref(), Some(record.volume as f64)),
        (filters.rsi.as_ref(), record.rsi),
    ];
    if ranged
        .into_iter()
        .any(|(range, value)| range.is_some_and(|r| !r.contains(value)))
    {
        return false;
    }

    if let Some(sectors) = filters.sector.as_ref().filter(|s| !s.is_empty()) {
        if !sectors.iter().any(|s| *s == record.sector) {
            return false;
        }
    }

    // Moving-average flags only constrain when explicitly true
    if filters.above_50ma == Some(true) && !record.above_fifty_day_ma {
        return false;
    }
    if filters.above_200ma == Some(true) && !record.above_two_hundred_day_ma {
        return false;
    }

    if let Some(signal) = filters.macd_signal {
        if record.macd_signal != signal {
            return false;
        }
    }

    true
}

/// Order-preserving subsequence of `universe` matching `filters`.
pub fn filter_records<'a>(
    universe: &'a [StockRecord],
    filters: &FilterSpec,
) -> Vec<&'a StockRecord> {
    universe.iter().filter(|r| matches(r, filters)).collect()
}
