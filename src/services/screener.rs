use std::sync::Arc;

use crate::error::{Result, ScreenerError};
use crate::models::screener::{ScreenerQuery, ScreenerRequest};
use crate::services::query_cache::QueryCache;
use crate::services::screener_engine::{self, ScreenResult};
use crate::services::templates::TemplateStore;
use crate::services::universe::UniverseStore;

/// Result of a screen plus whether it came from the cache
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    pub result: Arc<ScreenResult>,
    pub cached: bool,
}

/// Request-boundary wrapper: resolves templates, pins a snapshot and
/// consults the cache before running the pure engine.
#[derive(Clone)]
pub struct ScreenerService {
    universe: UniverseStore,
    cache: QueryCache,
    templates: TemplateStore,
}

impl ScreenerService {
    pub fn new(universe: UniverseStore, cache: QueryCache, templates: TemplateStore) -> Self {
        Self {
            universe,
            cache,
            templates,
        }
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Validates a decoded request into an engine query, applying its template if named.
    pub fn resolve(&self, request: ScreenerRequest) -> Result<ScreenerQuery> {
        let template = match request.template.as_deref() {
            Some(id) => Some(self.templates.get(id).ok_or_else(|| {
                ScreenerError::validation(format!("Unknown screener template: '{}'", id))
            })?),
            None => None,
        };

        request.into_query(template.map(|t| &t.filters))
    }

    pub async fn screen(&self, request: ScreenerRequest) -> Result<ScreenOutcome> {
        let query = self.resolve(request)?;

        let snapshot = self.universe.snapshot().ok_or_else(|| {
            ScreenerError::UniverseUnavailable("no stock data has been loaded yet".into())
        })?;

        let key = QueryCache::key_for(snapshot.version, &query)?;
        let (result, cached) = self
            .cache
            .get_or_compute(key, || screener_engine::query(&snapshot.records, &query))
            .await?;

        tracing::debug!(
            "Screen matched {} of {} records (snapshot v{}, cached: {})",
            result.total,
            snapshot.records.len(),
            snapshot.version,
            cached
        );

        Ok(ScreenOutcome { result, cached })
    }
}
