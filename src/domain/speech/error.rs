use crate::domain::shared::{ClassifiedError, ErrorKind};
use crate::error::AppError;
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("rate limit exceeded: {message}")]
    RateLimited {
        message: String,
        resets_at: DateTime<Utc>,
    },
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("synthesis timed out: {0}")]
    Timeout(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpeechServiceError {
    /// The taxonomy kind this error surfaces as
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::RateLimited { .. } => ErrorKind::RateLimitError,
            Self::Provider(_) => ErrorKind::ProviderError,
            Self::Network(_) => ErrorKind::NetworkError,
            Self::Timeout(_) => ErrorKind::TimeoutError,
            Self::Other(_) => ErrorKind::ProviderError,
        }
    }
}

impl From<ClassifiedError> for SpeechServiceError {
    fn from(err: ClassifiedError) -> Self {
        match err.kind {
            ErrorKind::TimeoutError => SpeechServiceError::Timeout(err.message),
            ErrorKind::NetworkError => SpeechServiceError::Network(err.message),
            ErrorKind::ValidationError => SpeechServiceError::Validation(err.message),
            _ => SpeechServiceError::Provider(err.message),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Validation(msg) => AppError::BadRequest(msg),
            SpeechServiceError::RateLimited { message, resets_at } => {
                AppError::RateLimitExceeded(message, resets_at)
            }
            SpeechServiceError::Provider(msg) | SpeechServiceError::Network(msg) => {
                AppError::ExternalService(msg)
            }
            SpeechServiceError::Timeout(msg) => AppError::Timeout(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_anyhow_error_surfaces_as_internal() {
        let err = SpeechServiceError::from(anyhow::anyhow!("settings dir unavailable"));
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        match AppError::from(err) {
            AppError::Internal(msg) => assert!(msg.contains("settings dir unavailable")),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
