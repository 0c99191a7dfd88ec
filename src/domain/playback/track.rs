use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata carried alongside a synthesized track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub source_text: String,
    pub emotion: String,
    pub language: String,
    pub character_count: usize,
}

/// One playable audio artifact. Owned by the playback engine once
/// enqueued; immutable after creation except for `duration`, which is
/// filled in once the sink reports playback metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub id: Uuid,
    pub audio_url: String,
    pub title: String,
    pub voice_id: String,
    pub duration: Option<f64>,
    pub metadata: TrackMetadata,
}

impl AudioTrack {
    pub fn new(
        audio_url: impl Into<String>,
        title: impl Into<String>,
        voice_id: impl Into<String>,
        metadata: TrackMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audio_url: audio_url.into(),
            title: title.into(),
            voice_id: voice_id.into(),
            duration: None,
            metadata,
        }
    }

    /// Structural check on the audio locator, done before any network or
    /// codec work is attempted
    pub fn has_valid_locator(&self) -> bool {
        let url = self.audio_url.as_str();
        !url.is_empty()
            && (url.starts_with("https://")
                || url.starts_with("http://")
                || url.starts_with("file://")
                || url.starts_with("blob:"))
    }
}
