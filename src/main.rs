use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockdash_backend::{
    config::Config,
    handlers,
    jobs::universe_refresh::start_universe_refresh_job,
    services::{
        query_cache::QueryCache, saved_screens::SavedScreenStore, screener::ScreenerService,
        templates::TemplateStore, universe::UniverseStore, universe_provider::provider_for,
    },
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stockdash_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Loads .env as well
    let config = Config::from_env()?;
    tracing::info!("Starting with config: {:?}", config);

    let universe = UniverseStore::new();
    let cache = QueryCache::new(config.query_cache_ttl_secs, config.query_cache_capacity);
    let provider = provider_for(&config.universe_source)?;

    // Runs once immediately, then on the configured interval
    start_universe_refresh_job(
        Arc::clone(&provider),
        universe.clone(),
        cache.clone(),
        config.universe_refresh_secs,
    )
    .await;

    let state = AppState {
        screener: ScreenerService::new(universe.clone(), cache, TemplateStore::new()),
        universe,
        saved_screens: SavedScreenStore::new(),
    };

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
