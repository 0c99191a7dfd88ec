use super::error::SpeechServiceError;
use super::model::{PendingJob, PollOutcome, SynthesisArtifact};
use crate::infrastructure::repositories::SpeechRepository;
use std::sync::Arc;
use std::time::Duration;

/// Drives a pending job to a terminal state.
///
/// An explicit loop with an attempt counter and a fixed sleep interval,
/// so the end-to-end latency bound is always attempts x interval. Each
/// request owns its own poller loop; loops never share state.
pub struct CompletionPoller {
    repository: Arc<dyn SpeechRepository>,
}

impl CompletionPoller {
    pub fn new(repository: Arc<dyn SpeechRepository>) -> Self {
        Self { repository }
    }

    /// Poll until the job succeeds, fails, or the attempt budget runs out.
    ///
    /// # Errors
    /// - Classified provider error when the provider reports a terminal
    ///   failure (returned immediately, no further attempts).
    /// - `SpeechServiceError::Timeout` after `max_attempts` attempts with
    ///   no terminal state.
    /// - The transport error itself when the final attempt fails at the
    ///   transport level; earlier transport failures are logged and retried.
    pub async fn poll(
        &self,
        pending: &PendingJob,
        max_attempts: u32,
        interval: Duration,
    ) -> Result<SynthesisArtifact, SpeechServiceError> {
        for attempt in 1..=max_attempts {
            match self.repository.fetch_status(&pending.poll_url).await {
                Ok(envelope) => match envelope.poll_outcome() {
                    PollOutcome::Succeeded(artifact) => {
                        tracing::info!(
                            attempt,
                            audio_url = %artifact.audio_url,
                            "Synthesis job completed"
                        );
                        return Ok(artifact);
                    }
                    PollOutcome::Failed(classified) => {
                        tracing::warn!(
                            attempt,
                            kind = %classified.kind,
                            message = %classified.message,
                            "Synthesis job reached terminal failure"
                        );
                        return Err(classified.into());
                    }
                    PollOutcome::StillRunning => {
                        tracing::debug!(attempt, max_attempts, "Job still running");
                    }
                },
                Err(err) if attempt == max_attempts => {
                    tracing::error!(
                        attempt,
                        error = %err,
                        "Transport failure on final poll attempt"
                    );
                    return Err(err);
                }
                Err(err) => {
                    // Transient transport failure: absorbed into the budget
                    tracing::warn!(attempt, error = %err, "Poll attempt failed, retrying");
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(interval).await;
            }
        }

        Err(SpeechServiceError::Timeout(format!(
            "no terminal state after {max_attempts} attempts"
        )))
    }
}
