use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::models::screener::ScreenerQuery;
use crate::services::screener_engine::ScreenResult;

/// Result cache that sits in front of the screener engine.
///
/// Keys carry the universe snapshot version, so results computed against an
/// older snapshot are never served for a newer one.
#[derive(Clone)]
pub struct QueryCache {
    cache: Cache<String, Arc<ScreenResult>>,
}

impl QueryCache {
    pub fn new(ttl_secs: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    pub fn key_for(snapshot_version: u64, query: &ScreenerQuery) -> Result<String> {
        Ok(format!("v{}:{}", snapshot_version, serde_json::to_string(query)?))
    }

    /// Returns the cached result for `key`, or runs `compute` and stores what it returns.
    /// The bool is true on a cache hit. Errors are never cached.
    pub async fn get_or_compute<F>(
        &self,
        key: String,
        compute: F,
    ) -> Result<(Arc<ScreenResult>, bool)>
    where
        F: FnOnce() -> Result<ScreenResult>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!("Screener cache hit for {}", key);
            return Ok((hit, true));
        }

        let result = Arc::new(compute()?);
        self.cache.insert(key, result.clone()).await;
        Ok((result, false))
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
