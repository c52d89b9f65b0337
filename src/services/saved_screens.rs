//! In-memory store for user-named screens
//!
//! The engine never sees these; a saved screen is just a FilterSpec that the
//! client sends back when it wants to run it.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{Result, ScreenerError};
use crate::models::screener::FilterSpec;

pub const MAX_SCREENS_PER_USER: usize = 50;
pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedScreen {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub filters: FilterSpec,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSavedScreenRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub filters: FilterSpec,
}

#[derive(Clone, Default)]
pub struct SavedScreenStore {
    screens: Arc<RwLock<HashMap<Uuid, SavedScreen>>>,
}

impl SavedScreenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller's screens, newest first
    pub fn list(&self, user_id: &str) -> Vec<SavedScreen> {
        let screens = self.screens.read();
        let mut owned: Vec<SavedScreen> = screens
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        owned
    }

    pub fn create(&self, user_id: &str, request: CreateSavedScreenRequest) -> Result<SavedScreen> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ScreenerError::validation("name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ScreenerError::validation(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        request.filters.validate()?;

        let mut screens = self.screens.write();
        let owned = screens.values().filter(|s| s.user_id == user_id).count();
        if owned >= MAX_SCREENS_PER_USER {
            return Err(ScreenerError::Conflict(format!(
                "at most {} saved screens per user",
                MAX_SCREENS_PER_USER
            )));
        }

        let now = Utc::now();
        let screen = SavedScreen {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name,
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            filters: request.filters,
            created_at: now,
            updated_at: now,
        };
        screens.insert(screen.id, screen.clone());

        tracing::info!("User {} saved screen '{}' ({})", user_id, screen.name, screen.id);
        Ok(screen)
    }

    /// Removes a screen owned by `user_id`. Someone else's screen reads as not found.
    pub fn delete(&self, user_id: &str, id: Uuid) -> Result<()> {
        let mut screens = self.screens.write();
        match screens.get(&id) {
            Some(screen) if screen.user_id == user_id => {
                screens.remove(&id);
                Ok(())
            }
            _ => Err(ScreenerError::NotFound(format!("Saved screen {} not found", id))),
        }
    }
}
