use super::speech_repository::{ProviderEnvelope, SpeechRepository};
use crate::domain::speech::error::SpeechServiceError;
use crate::domain::speech::model::{JobHandle, SynthesisJob};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// HTTP implementation of the speech provider protocol.
///
/// Submission POSTs the job to the provider endpoint; polling GETs the
/// handle address the provider returned. Both calls carry bounded
/// timeouts so no single request can hang the orchestrator.
pub struct HttpSpeechRepository {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    poll_timeout: Duration,
}

/// Outbound submission body
#[derive(Debug, Serialize)]
struct SubmissionBody<'a> {
    text: &'a str,
    voice: &'a str,
    emotion: &'a str,
    language: &'a str,
}

impl HttpSpeechRepository {
    pub fn new(
        endpoint: String,
        api_token: Option<String>,
        submit_timeout: Duration,
        poll_timeout: Duration,
    ) -> Result<Self, SpeechServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(submit_timeout)
            .timeout(submit_timeout)
            .build()
            .map_err(|e| {
                SpeechServiceError::Provider(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_token,
            poll_timeout,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl SpeechRepository for HttpSpeechRepository {
    async fn submit(&self, job: &SynthesisJob) -> Result<JobHandle, SpeechServiceError> {
        let body = SubmissionBody {
            text: &job.text,
            voice: &job.voice_id,
            emotion: job.emotion.as_str(),
            language: &job.language,
        };

        tracing::info!(
            voice = %job.voice_id,
            emotion = %job.emotion,
            language = %job.language,
            text_length = job.text.len(),
            "Submitting synthesis job to provider"
        );

        let response = self
            .authorize(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Provider submission failed");
                SpeechServiceError::Provider(format!("provider unreachable: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status.as_u16(),
                detail = %detail,
                "Provider rejected submission"
            );
            return Err(SpeechServiceError::Provider(format!(
                "provider returned HTTP {}: {detail}",
                status.as_u16()
            )));
        }

        let envelope: ProviderEnvelope = response.json().await.map_err(|e| {
            SpeechServiceError::Provider(format!("malformed provider envelope: {e}"))
        })?;

        envelope.into_job_handle()
    }

    async fn fetch_status(&self, poll_url: &str) -> Result<ProviderEnvelope, SpeechServiceError> {
        let response = self
            .authorize(self.client.get(poll_url))
            .timeout(self.poll_timeout)
            .send()
            .await
            .map_err(|e| SpeechServiceError::Network(format!("poll request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechServiceError::Network(format!(
                "poll returned HTTP {}",
                status.as_u16()
            )));
        }

        response
            .json::<ProviderEnvelope>()
            .await
            .map_err(|e| SpeechServiceError::Provider(format!("malformed poll envelope: {e}")))
    }
}
