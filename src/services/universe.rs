//! Universe Store
//!
//! Holds the current immutable snapshot of stock records. A refresh builds a
//! whole new snapshot and swaps the pointer; in-flight queries keep the `Arc`
//! they already cloned and never see a half-written universe.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Result, ScreenerError};
use crate::models::stock::StockRecord;

#[derive(Debug)]
pub struct UniverseSnapshot {
    pub version: u64,
    pub refreshed_at: DateTime<Utc>,
    pub records: Vec<StockRecord>,
}

#[derive(Clone, Default)]
pub struct UniverseStore {
    current: Arc<RwLock<Option<Arc<UniverseSnapshot>>>>,
}

impl UniverseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest installed snapshot, or None before the first refresh.
    pub fn snapshot(&self) -> Option<Arc<UniverseSnapshot>> {
        self.current.read().clone()
    }

    /// Validates `records` and installs them as the new current snapshot.
    /// On error the previous snapshot stays in place.
    pub fn replace(&self, records: Vec<StockRecord>) -> Result<Arc<UniverseSnapshot>> {
        let records = normalize(records)?;

        let mut current = self.current.write();
        let version = current.as_ref().map(|s| s.version + 1).unwrap_or(1);
        let snapshot = Arc::new(UniverseSnapshot {
            version,
            refreshed_at: Utc::now(),
            records,
        });
        *current = Some(snapshot.clone());

        Ok(snapshot)
    }
}

fn normalize(mut records: Vec<StockRecord>) -> Result<Vec<StockRecord>> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records.iter_mut() {
        record.ticker = record.ticker.trim().to_uppercase();

        if record.ticker.is_empty() {
            return Err(ScreenerError::InvalidUniverse("record with empty ticker".into()));
        }
        if !seen.insert(record.ticker.clone()) {
            return Err(ScreenerError::InvalidUniverse(format!(
                "duplicate ticker {}",
                record.ticker
            )));
        }
        if !record.market_cap.is_finite() || record.market_cap < 0.0 {
            return Err(ScreenerError::InvalidUniverse(format!(
                "{} has invalid market cap {}",
                record.ticker, record.market_cap
            )));
        }
        if !record.price.is_finite() {
            return Err(ScreenerError::InvalidUniverse(format!(
                "{} has non-finite price",
                record.ticker
            )));
        }
        if let Some(rsi) = record.rsi {
            if !(0.0..=100.0).contains(&rsi) {
                return Err(ScreenerError::InvalidUniverse(format!(
                    "{} has RSI {} outside [0, 100]",
                    record.ticker, rsi
                )));
            }
        }
    }

    Ok(records)
}
