//! Sort stage of the screener engine

use icu_collator::{options::CollatorOptions, Collator, CollatorBorrowed};
use lazy_static::lazy_static;
use std::cmp::Ordering;

use crate::models::screener::{SortField, SortSpec};
use crate::models::stock::StockRecord;

enum SortKey<'a> {
    Number(Option<f64>),
    Text(&'a str),
}

fn sort_key(record: &StockRecord, field: SortField) -> SortKey<'_> {
    match field {
        SortField::Ticker => SortKey::Text(&record.ticker),
        SortField::Name => SortKey::Text(&record.name),
        SortField::Sector => SortKey::Text(&record.sector),
        SortField::Price => SortKey::Number(Some(record.price)),
        SortField::Change => SortKey::Number(Some(record.change)),
        SortField::ChangePercent => SortKey::Number(Some(record.change_percent)),
        SortField::MarketCap => SortKey::Number(Some(record.market_cap)),
        SortField::PeRatio => SortKey::Number(record.pe_ratio),
        SortField::DividendYield => SortKey::Number(record.dividend_yield),
        SortField::Rsi => SortKey::Number(record.rsi),
        SortField::Volume => SortKey::Number(Some(record.volume as f64)),
        SortField::FiftyTwoWeekHigh => SortKey::Number(Some(record.fifty_two_week_high)),
        SortField::FiftyTwoWeekLow => SortKey::Number(Some(record.fifty_two_week_low)),
    }
}

lazy_static! {
    // Root-locale tertiary collation; the data is compiled into the binary
    static ref ROOT_COLLATOR: CollatorBorrowed<'static> =
        Collator::try_new(Default::default(), CollatorOptions::default())
            .expect("compiled root collation data");
}

/// Locale-aware comparison (root locale) with a byte-order tie-break for
/// strings the collator considers equivalent.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.compare(a, b).then_with(|| a.cmp(b))
}

/// Missing numbers go last whatever the order. `-0.0` and `0.0` compare equal.
pub fn compare(a: &StockRecord, b: &StockRecord, sort: &SortSpec) -> Ordering {
    match (sort_key(a, sort.field), sort_key(b, sort.field)) {
        (SortKey::Number(x), SortKey::Number(y)) => match (x, y) {
            (Some(x), Some(y)) => {
                sort.order.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal))
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        (SortKey::Text(x), SortKey::Text(y)) => sort.order.apply(collate(x, y)),
        _ => Ordering::Equal,
    }
}

/// Stable in-place sort; ties keep their filter-stage order.
pub fn sort_records(records: &mut [&StockRecord], sort: Option<&SortSpec>) {
    if let Some(sort) = sort {
        records.sort_by(|a, b| compare(a, b, sort));
    }
}
