use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::services::query_cache::QueryCache;
use crate::services::universe::UniverseStore;
use crate::services::universe_provider::UniverseProvider;

pub async fn start_universe_refresh_job(
    provider: Arc<dyn UniverseProvider>,
    store: UniverseStore,
    cache: QueryCache,
    interval_secs: u64,
) {
    tokio::spawn(async move {
        // First tick fires immediately, so the initial load happens on startup
        let mut interval = interval(Duration::from_secs(interval_secs.max(1)));

        loop {
            interval.tick().await;
            tracing::info!("Refreshing stock universe from {} provider", provider.name());

            if let Err(e) = refresh_universe(provider.as_ref(), &store, &cache).await {
                tracing::error!("Failed to refresh stock universe: {}", e);
            }
        }
    });
}

/// Loads a fresh universe and swaps it in. On failure the previous snapshot stays current.
pub async fn refresh_universe(
    provider: &dyn UniverseProvider,
    store: &UniverseStore,
    cache: &QueryCache,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let records = provider.fetch_universe().await?;
    let snapshot = store.replace(records)?;
    cache.invalidate_all();

    tracing::info!(
        "Stock universe v{} installed with {} records",
        snapshot.version,
        snapshot.records.len()
    );

    Ok(snapshot.records.len())
}
