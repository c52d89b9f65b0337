use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response structure for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,                       // "ok" or "loading"
    pub universe_version: Option<u64>,
    pub universe_size: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}
