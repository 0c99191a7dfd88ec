use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed taxonomy of failure kinds surfaced to callers and to the
/// playback UI. Every low-level failure signal maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NetworkError,
    DecodeError,
    UnsupportedFormatError,
    PlaybackError,
    PermissionError,
    ProviderError,
    TimeoutError,
    ValidationError,
    RateLimitError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "network_error",
            ErrorKind::DecodeError => "decode_error",
            ErrorKind::UnsupportedFormatError => "unsupported_format_error",
            ErrorKind::PlaybackError => "playback_error",
            ErrorKind::PermissionError => "permission_error",
            ErrorKind::ProviderError => "provider_error",
            ErrorKind::TimeoutError => "timeout_error",
            ErrorKind::ValidationError => "validation_error",
            ErrorKind::RateLimitError => "rate_limit_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Low-level failure signals as they arrive from transport code, the
/// provider protocol, or the audio sink
#[derive(Debug, Clone)]
pub enum FailureSignal {
    /// Network-level failure (connect refused, reset, DNS, fetch abort)
    Transport { detail: String },
    /// Audio bytes arrived but could not be decoded
    Decode { detail: String },
    /// Container/codec the sink cannot play at all
    UnsupportedMedia { detail: String },
    /// Playback start refused pending a user gesture
    AutoplayBlocked,
    /// Provider reported a terminal failure status for a job
    ProviderFailure {
        status: String,
        detail: Option<String>,
    },
    /// A bounded operation ran out of time or attempts
    Timeout { detail: String },
    /// Request shape rejected before any side effect
    Validation { detail: String },
    /// Admission control rejected the caller for the current window
    RateLimited { resets_at: DateTime<Utc> },
    /// Anything the sink or transport reported that we do not recognize
    Unknown { detail: String },
}

/// Classified failure: one kind, a human-readable message, and whether
/// retrying the same operation is worthwhile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub recoverable: bool,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            recoverable,
        }
    }
}

impl std::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Map a failure signal to its classified form.
///
/// Total over all inputs: unrecognized signals fall back to a recoverable
/// PlaybackError rather than panicking or being dropped. Non-recoverable
/// kinds (decode, unsupported format, validation) must stop retry loops.
pub fn classify(signal: &FailureSignal) -> ClassifiedError {
    match signal {
        FailureSignal::Transport { detail } => ClassifiedError::new(
            ErrorKind::NetworkError,
            format!("network failure: {detail}"),
            true,
        ),
        FailureSignal::Decode { detail } => ClassifiedError::new(
            ErrorKind::DecodeError,
            format!("audio could not be decoded: {detail}"),
            false,
        ),
        FailureSignal::UnsupportedMedia { detail } => ClassifiedError::new(
            ErrorKind::UnsupportedFormatError,
            format!("unsupported audio format: {detail}"),
            false,
        ),
        FailureSignal::AutoplayBlocked => ClassifiedError::new(
            ErrorKind::PermissionError,
            "playback blocked until user interaction",
            true,
        ),
        FailureSignal::ProviderFailure { status, detail } => {
            let message = match detail {
                Some(detail) => format!("provider reported {status}: {detail}"),
                None => format!("provider reported {status}"),
            };
            ClassifiedError::new(ErrorKind::ProviderError, message, false)
        }
        FailureSignal::Timeout { detail } => {
            ClassifiedError::new(ErrorKind::TimeoutError, detail.clone(), true)
        }
        FailureSignal::Validation { detail } => {
            ClassifiedError::new(ErrorKind::ValidationError, detail.clone(), false)
        }
        FailureSignal::RateLimited { resets_at } => ClassifiedError::new(
            ErrorKind::RateLimitError,
            format!("rate limit exceeded, resets at {}", resets_at.to_rfc3339()),
            true,
        ),
        FailureSignal::Unknown { detail } => ClassifiedError::new(
            ErrorKind::PlaybackError,
            format!("playback failure: {detail}"),
            true,
        ),
    }
}
