use super::dto::{SynthesisRequest, SynthesisResponse};
use super::error::SpeechServiceError;
use super::model::{JobHandle, SynthesisJob};
use super::poller::CompletionPoller;
use super::voice::{find_voice, resolve_emotion};
use crate::infrastructure::repositories::{QuotaStore, SpeechRepository};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Tunables for one orchestrator instance, filled in from Config
#[derive(Debug, Clone)]
pub struct SpeechLimits {
    pub max_text_chars: usize,
    pub quota_limit: u32,
    pub quota_window: chrono::Duration,
    pub poll_max_attempts: u32,
    pub poll_interval: Duration,
}

pub struct SpeechService {
    quota: Arc<dyn QuotaStore>,
    repository: Arc<dyn SpeechRepository>,
    poller: CompletionPoller,
    limits: SpeechLimits,
}

impl SpeechService {
    pub fn new(
        quota: Arc<dyn QuotaStore>,
        repository: Arc<dyn SpeechRepository>,
        limits: SpeechLimits,
    ) -> Self {
        let poller = CompletionPoller::new(repository.clone());
        Self {
            quota,
            repository,
            poller,
            limits,
        }
    }

    pub fn limits(&self) -> &SpeechLimits {
        &self.limits
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Run one synthesis request end to end for a caller
    ///
    /// This operation:
    /// - Validates request shape before touching quota or the network
    /// - Consumes one quota unit per attempted request (over-quota
    ///   rejections consume nothing)
    /// - Submits the job and, for asynchronous providers, polls the
    ///   handle until a terminal state or the attempt budget runs out
    ///
    /// Returns the audio locator with echoed metadata and remaining quota
    async fn generate(
        &self,
        caller_id: &str,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn generate(
        &self,
        caller_id: &str,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechServiceError> {
        tracing::info!(
            caller_id = %caller_id,
            voice = %request.voice,
            text_length = request.text.len(),
            "Synthesis request"
        );

        // 1. Validate shape before any side effect
        let job = self.validate(&request)?;

        // 2. Admission control; a rejection carries the stored reset time
        let decision = self.quota.check_and_consume(
            caller_id,
            self.limits.quota_limit,
            self.limits.quota_window,
        );
        if !decision.allowed {
            tracing::warn!(
                caller_id = %caller_id,
                resets_at = %decision.resets_at,
                "Request rejected: over quota"
            );
            return Err(SpeechServiceError::RateLimited {
                message: format!(
                    "quota of {} requests exhausted, resets at {}",
                    self.limits.quota_limit,
                    decision.resets_at.to_rfc3339()
                ),
                resets_at: decision.resets_at,
            });
        }

        // 3. Submit, then 4./5. return the terminal result directly or
        // hand the pending job to the poller
        let artifact = match self.repository.submit(&job).await? {
            JobHandle::Completed(artifact) => {
                tracing::info!(caller_id = %caller_id, "Provider answered synchronously");
                artifact
            }
            JobHandle::Pending(pending) => {
                tracing::info!(
                    caller_id = %caller_id,
                    poll_url = %pending.poll_url,
                    "Provider returned polling handle"
                );
                self.poller
                    .poll(
                        &pending,
                        self.limits.poll_max_attempts,
                        self.limits.poll_interval,
                    )
                    .await?
            }
        };

        Ok(SynthesisResponse {
            audio_url: artifact.audio_url,
            voice: job.voice_id,
            emotion: job.emotion.as_str().to_string(),
            language: job.language,
            character_count: job.text.chars().count(),
            remaining_quota: decision.remaining,
        })
    }
}

impl SpeechService {
    fn validate(&self, request: &SynthesisRequest) -> Result<SynthesisJob, SpeechServiceError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(SpeechServiceError::Validation(
                "text cannot be empty".to_string(),
            ));
        }

        let char_count = text.chars().count();
        if char_count > self.limits.max_text_chars {
            return Err(SpeechServiceError::Validation(format!(
                "text of {char_count} characters exceeds the maximum of {}",
                self.limits.max_text_chars
            )));
        }

        let voice = find_voice(&request.voice).ok_or_else(|| {
            SpeechServiceError::Validation(format!("unknown voice: {}", request.voice))
        })?;

        // Absent or unrecognized emotion tags fall back to the voice default
        let emotion = resolve_emotion(voice, request.emotion.as_deref());

        let language = request
            .language
            .clone()
            .unwrap_or_else(|| voice.language.to_string());

        Ok(SynthesisJob {
            text: text.to_string(),
            voice_id: voice.id.to_string(),
            emotion,
            language,
        })
    }
}
