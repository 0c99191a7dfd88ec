use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    domain::{
        shared::usage_dto::UsageResponse,
        speech::{
            SpeechService, SpeechServiceApi, SynthesisRequest, SynthesisResponse, Voice,
            VOICE_CATALOG,
        },
    },
    error::{AppError, AppResult},
    infrastructure::{http::caller::CallerIdentity, repositories::QuotaStore},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    quota: Arc<dyn QuotaStore>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>, quota: Arc<dyn QuotaStore>) -> Self {
        Self {
            speech_service,
            quota,
        }
    }

    /// POST /api/speech/generate - Submit text and wait for synthesized audio
    pub async fn generate(
        State(controller): State<Arc<SpeechController>>,
        Extension(caller): Extension<CallerIdentity>,
        Json(request): Json<SynthesisRequest>,
    ) -> AppResult<Json<SynthesisResponse>> {
        let response = controller
            .speech_service
            .generate(&caller.0, request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(response))
    }

    /// GET /api/speech/voices - The fixed voice catalog
    pub async fn list_voices() -> Json<Vec<Voice>> {
        Json(VOICE_CATALOG.to_vec())
    }

    /// GET /api/speech/usage - Quota window snapshot for the caller
    pub async fn get_usage(
        State(controller): State<Arc<SpeechController>>,
        Extension(caller): Extension<CallerIdentity>,
    ) -> AppResult<Json<UsageResponse>> {
        let limits = controller.speech_service.limits();
        let snapshot = controller
            .quota
            .snapshot(&caller.0, limits.quota_limit, limits.quota_window);

        Ok(Json(UsageResponse {
            used: limits.quota_limit - snapshot.remaining,
            limit: limits.quota_limit,
            remaining: snapshot.remaining,
            resets_at: snapshot.resets_at,
        }))
    }
}
