//! Sources for the stock universe
//!
//! The refresh job only knows the [`UniverseProvider`] trait. Which source is
//! used is decided once at startup from configuration.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::UniverseSource;
use crate::error::{Result, ScreenerError};
use crate::models::stock::StockRecord;
use crate::services::sample_universe::sample_records;

#[async_trait]
pub trait UniverseProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_universe(&self) -> Result<Vec<StockRecord>>;
}

/// Reads a JSON array of camelCase stock records from disk
pub struct JsonFileUniverseProvider {
    path: PathBuf,
}

impl JsonFileUniverseProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UniverseProvider for JsonFileUniverseProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_universe(&self) -> Result<Vec<StockRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<StockRecord> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Fetches the same JSON array from an HTTP endpoint
pub struct HttpUniverseProvider {
    client: Client,
    url: String,
}

impl HttpUniverseProvider {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl UniverseProvider for HttpUniverseProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_universe(&self) -> Result<Vec<StockRecord>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(ScreenerError::Upstream(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }

        Ok(response.json::<Vec<StockRecord>>().await?)
    }
}

/// Built-in dataset for local development
#[derive(Default)]
pub struct SampleUniverseProvider;

#[async_trait]
impl UniverseProvider for SampleUniverseProvider {
    fn name(&self) -> &str {
        "sample"
    }

    async fn fetch_universe(&self) -> Result<Vec<StockRecord>> {
        Ok(sample_records())
    }
}

pub fn provider_for(source: &UniverseSource) -> Result<Arc<dyn UniverseProvider>> {
    Ok(match source {
        UniverseSource::Sample => Arc::new(SampleUniverseProvider),
        UniverseSource::File(path) => Arc::new(JsonFileUniverseProvider::new(path.clone())),
        UniverseSource::Http(url) => Arc::new(HttpUniverseProvider::new(url.clone())?),
    })
}
