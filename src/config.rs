use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, ScreenerError};

/// Where the refresh job loads the stock universe from
#[derive(Debug, Clone, PartialEq)]
pub enum UniverseSource {
    Sample,
    File(PathBuf),
    Http(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub universe_source: UniverseSource,
    pub universe_refresh_secs: u64,
    pub query_cache_ttl_secs: u64,
    pub query_cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            universe_source: UniverseSource::Sample,
            universe_refresh_secs: 300,
            query_cache_ttl_secs: 60,
            query_cache_capacity: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let universe_source = match lookup("UNIVERSE_SOURCE").as_deref() {
            None | Some("sample") => UniverseSource::Sample,
            Some("file") => {
                let path = lookup("UNIVERSE_PATH").ok_or_else(|| {
                    ScreenerError::Config(
                        "UNIVERSE_PATH must be set when UNIVERSE_SOURCE=file".into(),
                    )
                })?;
                UniverseSource::File(PathBuf::from(path))
            }
            Some("http") => {
                let url = lookup("UNIVERSE_URL").ok_or_else(|| {
                    ScreenerError::Config(
                        "UNIVERSE_URL must be set when UNIVERSE_SOURCE=http".into(),
                    )
                })?;
                UniverseSource::Http(url)
            }
            Some(other) => {
                return Err(ScreenerError::Config(format!(
                    "Unknown UNIVERSE_SOURCE '{}'. Expected sample, file or http",
                    other
                )));
            }
        };

        Ok(Config {
            bind_addr,
            universe_source,
            universe_refresh_secs: parse_or(
                &lookup,
                "UNIVERSE_REFRESH_SECS",
                defaults.universe_refresh_secs,
            )?,
            query_cache_ttl_secs: parse_or(
                &lookup,
                "QUERY_CACHE_TTL_SECS",
                defaults.query_cache_ttl_secs,
            )?,
            query_cache_capacity: parse_or(
                &lookup,
                "QUERY_CACHE_CAPACITY",
                defaults.query_cache_capacity,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ScreenerError::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}
