use serde::{Deserialize, Serialize};

/// Request for POST /api/speech/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response for POST /api/speech/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub audio_url: String,
    pub voice: String,
    pub emotion: String,
    pub language: String,
    pub character_count: usize,
    pub remaining_quota: u32,
}
