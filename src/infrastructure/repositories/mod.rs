pub mod http_speech_repository;
pub mod quota_repository;
pub mod speech_repository;

pub use http_speech_repository::HttpSpeechRepository;
pub use quota_repository::{InMemoryQuotaStore, QuotaDecision, QuotaStore};
pub use speech_repository::{ProviderEnvelope, SpeechRepository};
