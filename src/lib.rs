// src/lib.rs

use services::{
    saved_screens::SavedScreenStore, screener::ScreenerService, universe::UniverseStore,
};

#[derive(Clone)]
pub struct AppState {
    pub screener: ScreenerService,
    pub universe: UniverseStore,
    pub saved_screens: SavedScreenStore,
}

pub mod services {
    pub mod screener;
    pub mod screener_engine;
    pub mod screener_filter;
    pub mod screener_sort;
    pub mod screener_params;
    pub mod query_cache;
    pub mod templates;
    pub mod universe;
    pub mod universe_provider;
    pub mod sample_universe;
    pub mod saved_screens;
}

pub mod config;
pub mod error;
pub mod models;
pub mod handlers;
pub mod jobs;

#[cfg(test)]
mod test_support;
