use serde::{Deserialize, Serialize};

use crate::services::templates::ScreenerTemplate;

/// Query parameters for GET /api/screener/templates
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesQuery {
    pub category: Option<String>,   // e.g. "technical"
}

/// Response structure for the template listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<ScreenerTemplate>,
    pub total_count: usize,
}
