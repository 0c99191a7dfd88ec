use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for GET /api/speech/usage
#[derive(Debug, Serialize, Deserialize)]
pub struct UsageResponse {
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
    pub resets_at: DateTime<Utc>,
}
