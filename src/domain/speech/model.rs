use super::voice::Emotion;
use crate::domain::shared::ClassifiedError;

/// A validated synthesis job, ready to hand to the provider.
/// Only the orchestrator constructs these; invalid requests never get this far.
#[derive(Debug, Clone)]
pub struct SynthesisJob {
    pub text: String,
    pub voice_id: String,
    pub emotion: Emotion,
    pub language: String,
}

/// Terminal output of a synthesis job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisArtifact {
    pub audio_url: String,
}

/// A provider-supplied handle for a job that is still running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingJob {
    pub poll_url: String,
}

/// What the provider answered at submission time: either the finished
/// artifact (no polling needed) or a handle to poll
#[derive(Debug, Clone)]
pub enum JobHandle {
    Completed(SynthesisArtifact),
    Pending(PendingJob),
}

/// Result of interpreting a single poll attempt
#[derive(Debug, Clone)]
pub enum PollOutcome {
    Succeeded(SynthesisArtifact),
    Failed(ClassifiedError),
    StillRunning,
}
