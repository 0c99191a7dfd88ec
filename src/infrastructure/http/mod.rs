pub mod caller;
pub mod request_id;

use axum::{middleware, routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, speech::SpeechController};
use crate::infrastructure::config::Config;
use caller::caller_identity_middleware;
use request_id::request_id_middleware;

/// Assemble the application router
pub fn build_router(speech_controller: Arc<SpeechController>) -> Router {
    let speech_routes = Router::new()
        .route("/api/speech/generate", post(SpeechController::generate))
        .route("/api/speech/voices", get(SpeechController::list_voices))
        .route("/api/speech/usage", get(SpeechController::get_usage))
        .with_state(speech_controller)
        .layer(middleware::from_fn(caller_identity_middleware));

    Router::new()
        .route("/health", get(health::health))
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
) -> anyhow::Result<()> {
    let app = build_router(speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
