use serde::Serialize;

use crate::services::saved_screens::SavedScreen;

/// Response structure for GET /api/screener/saved
#[derive(Debug, Clone, Serialize)]
pub struct SavedScreensResponse {
    pub screens: Vec<SavedScreen>,
    pub total_count: usize,
}
