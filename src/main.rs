use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicetape_backend::controllers::speech::SpeechController;
use voicetape_backend::domain::speech::{SpeechLimits, SpeechService};
use voicetape_backend::infrastructure::config::{Config, LogFormat};
use voicetape_backend::infrastructure::http::start_http_server;
use voicetape_backend::infrastructure::repositories::{HttpSpeechRepository, InMemoryQuotaStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceTape Backend on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!(provider_url = %config.provider_url, "Instantiating repositories...");
    let quota_store = Arc::new(InMemoryQuotaStore::new());
    let speech_repo = Arc::new(HttpSpeechRepository::new(
        config.provider_url.clone(),
        config.provider_api_token.clone(),
        Duration::from_secs(config.submit_timeout_secs),
        Duration::from_secs(config.poll_timeout_secs),
    )?);

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(SpeechService::new(
        quota_store.clone(),
        speech_repo,
        SpeechLimits {
            max_text_chars: config.max_text_chars,
            quota_limit: config.quota_limit,
            quota_window: chrono::Duration::seconds(config.quota_window_secs),
            poll_max_attempts: config.poll_max_attempts,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        },
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(SpeechController::new(speech_service, quota_store));

    // Start HTTP server with all routes
    let config = Arc::new(config);
    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicetape_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicetape_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
