use crate::domain::shared::{classify, FailureSignal};
use crate::domain::speech::error::SpeechServiceError;
use crate::domain::speech::model::{
    JobHandle, PendingJob, PollOutcome, SynthesisArtifact, SynthesisJob,
};
use async_trait::async_trait;
use serde::Deserialize;

/// Statuses the provider reports as terminal success
const SUCCESS_STATUSES: &[&str] = &["succeeded", "completed"];

/// Statuses the provider reports as terminal failure
const FAILURE_STATUSES: &[&str] = &["failed", "error", "canceled"];

/// Repository for asynchronous speech synthesis jobs.
/// Abstracts the underlying provider protocol (submit, then poll a handle).
///
/// Implementations are responsible for:
/// - Bounded timeouts on every outbound call
/// - Decoding the provider's response envelope
/// - Staying stateless between invocations
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Submit a synthesis job to the provider.
    ///
    /// Returns either the finished artifact (provider answered synchronously)
    /// or a pending handle to poll.
    ///
    /// # Errors
    /// Returns `SpeechServiceError::Provider` when the provider is
    /// unreachable or the envelope is malformed.
    async fn submit(&self, job: &SynthesisJob) -> Result<JobHandle, SpeechServiceError>;

    /// Query a pending job's polling address once and return the raw envelope.
    async fn fetch_status(&self, poll_url: &str) -> Result<ProviderEnvelope, SpeechServiceError>;
}

/// The provider's response envelope, shared by submission and polling.
///
/// Terminal shape: `{"status": "succeeded", "output": <locator>}`.
/// Pending shape: `{"urls": {"get": "<polling address>"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub urls: Option<ProviderUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUrls {
    #[serde(default)]
    pub get: Option<String>,
}

impl ProviderEnvelope {
    /// Pull a usable audio locator out of the `output` field.
    /// Providers hand back a bare string, an array of strings, or an
    /// object carrying an `audio`/`url` member.
    pub fn audio_locator(&self) -> Option<String> {
        let output = self.output.as_ref()?;
        match output {
            serde_json::Value::String(url) if !url.is_empty() => Some(url.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.as_str())
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            serde_json::Value::Object(map) => map
                .get("audio")
                .or_else(|| map.get("url"))
                .and_then(|v| v.as_str())
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Interpret one poll attempt's envelope.
    ///
    /// A success status without a locator is treated as still running:
    /// some providers report success slightly before the artifact is
    /// visible, and that tolerance consumes the regular attempt budget.
    pub fn poll_outcome(&self) -> PollOutcome {
        let status = self.status.as_deref().unwrap_or("");
        if SUCCESS_STATUSES.contains(&status) {
            return match self.audio_locator() {
                Some(audio_url) => PollOutcome::Succeeded(SynthesisArtifact { audio_url }),
                None => PollOutcome::StillRunning,
            };
        }
        if FAILURE_STATUSES.contains(&status) {
            return PollOutcome::Failed(classify(&FailureSignal::ProviderFailure {
                status: status.to_string(),
                detail: self.error.clone(),
            }));
        }
        PollOutcome::StillRunning
    }

    /// Interpret the submission response.
    ///
    /// Unlike polling, a success status without a locator is malformed
    /// here, and a terminal failure is a provider error outright.
    pub fn into_job_handle(self) -> Result<JobHandle, SpeechServiceError> {
        let status = self.status.as_deref().unwrap_or("");
        if SUCCESS_STATUSES.contains(&status) {
            return match self.audio_locator() {
                Some(audio_url) => Ok(JobHandle::Completed(SynthesisArtifact { audio_url })),
                None => Err(SpeechServiceError::Provider(
                    "provider reported success without an audio locator".to_string(),
                )),
            };
        }
        if FAILURE_STATUSES.contains(&status) {
            let detail = self.error.unwrap_or_else(|| "no detail".to_string());
            return Err(SpeechServiceError::Provider(format!(
                "provider rejected job with status {status}: {detail}"
            )));
        }
        if let Some(poll_url) = self.urls.and_then(|urls| urls.get) {
            if !poll_url.is_empty() {
                return Ok(JobHandle::Pending(PendingJob { poll_url }));
            }
        }
        Err(SpeechServiceError::Provider(
            "provider response had neither a terminal result nor a polling address".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: serde_json::Value) -> ProviderEnvelope {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_locator_from_bare_string() {
        let env = envelope(serde_json::json!({
            "status": "succeeded",
            "output": "https://cdn.example.com/a.mp3"
        }));
        assert_eq!(
            env.audio_locator().as_deref(),
            Some("https://cdn.example.com/a.mp3")
        );
    }

    #[test]
    fn test_locator_from_array_takes_first_string() {
        let env = envelope(serde_json::json!({
            "status": "completed",
            "output": ["https://cdn.example.com/a.mp3", "https://cdn.example.com/b.mp3"]
        }));
        assert_eq!(
            env.audio_locator().as_deref(),
            Some("https://cdn.example.com/a.mp3")
        );
    }

    #[test]
    fn test_locator_from_object_audio_field() {
        let env = envelope(serde_json::json!({
            "status": "succeeded",
            "output": {"audio": "https://cdn.example.com/a.mp3", "seed": 7}
        }));
        assert_eq!(
            env.audio_locator().as_deref(),
            Some("https://cdn.example.com/a.mp3")
        );
    }

    #[test]
    fn test_success_without_locator_polls_as_still_running() {
        let env = envelope(serde_json::json!({"status": "succeeded"}));
        assert!(matches!(env.poll_outcome(), PollOutcome::StillRunning));
    }

    #[test]
    fn test_terminal_failure_polls_as_failed() {
        let env = envelope(serde_json::json!({
            "status": "failed",
            "error": "voice model crashed"
        }));
        match env.poll_outcome() {
            PollOutcome::Failed(err) => {
                assert!(err.message.contains("failed"));
                assert!(err.message.contains("voice model crashed"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_polls_as_still_running() {
        let env = envelope(serde_json::json!({"status": "processing"}));
        assert!(matches!(env.poll_outcome(), PollOutcome::StillRunning));
    }

    #[test]
    fn test_submission_success_without_locator_is_provider_error() {
        let env = envelope(serde_json::json!({"status": "succeeded"}));
        assert!(matches!(
            env.into_job_handle(),
            Err(SpeechServiceError::Provider(_))
        ));
    }

    #[test]
    fn test_submission_pending_handle() {
        let env = envelope(serde_json::json!({
            "urls": {"get": "https://provider.example.com/jobs/42"}
        }));
        match env.into_job_handle().unwrap() {
            JobHandle::Pending(pending) => {
                assert_eq!(pending.poll_url, "https://provider.example.com/jobs/42");
            }
            other => panic!("expected Pending, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_empty_envelope_is_provider_error() {
        let env = envelope(serde_json::json!({}));
        assert!(matches!(
            env.into_job_handle(),
            Err(SpeechServiceError::Provider(_))
        ));
    }

    #[test]
    fn test_submission_synchronous_success() {
        let env = envelope(serde_json::json!({
            "status": "completed",
            "output": "https://cdn.example.com/now.mp3"
        }));
        match env.into_job_handle().unwrap() {
            JobHandle::Completed(artifact) => {
                assert_eq!(artifact.audio_url, "https://cdn.example.com/now.mp3");
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }
}
