//! Screener query engine
//!
//! Pure Filter -> Sort -> Paginate pipeline over a snapshot of the stock universe.
//! Nothing here touches shared state; callers may run queries in parallel against
//! the same snapshot.

use serde::Serialize;

use crate::error::Result;
use crate::models::screener::ScreenerQuery;
use crate::models::stock::StockRecord;
use crate::services::screener_filter::filter_records;
use crate::services::screener_sort::sort_records;

/// Outcome of one screen: the post-filter count and the requested page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenResult {
    pub total: usize,
    pub results: Vec<StockRecord>,
}

/// Slice with clamped bounds; never panics on out-of-range offsets.
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Vec<T> {
    let start = offset.min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    items[start..end].to_vec()
}

pub fn query(universe: &[StockRecord], query: &ScreenerQuery) -> Result<ScreenResult> {
    query.validate()?;

    let mut matched = filter_records(universe, &query.filters);
    let total = matched.len();

    sort_records(&mut matched, query.sort.as_ref());

    let results = paginate(&matched, query.offset, query.limit)
        .into_iter()
        .cloned()
        .collect();

    Ok(ScreenResult { total, results })
}
