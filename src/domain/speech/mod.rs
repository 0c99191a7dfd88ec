pub mod dto;
pub mod error;
pub mod model;
pub mod poller;
pub mod service;
pub mod voice;

pub use dto::{SynthesisRequest, SynthesisResponse};
pub use error::SpeechServiceError;
pub use model::{JobHandle, PendingJob, PollOutcome, SynthesisArtifact, SynthesisJob};
pub use poller::CompletionPoller;
pub use service::{SpeechLimits, SpeechService, SpeechServiceApi};
pub use voice::{find_voice, Emotion, Voice, VOICE_CATALOG};
