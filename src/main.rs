use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use sussurro::infrastructure::audio::{Device, WhisperEngineFactory};
use sussurro::infrastructure::observability::{init_tracing, TracingConfig};
use sussurro::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            json_format: settings.json_logs,
        },
        settings.port,
    );

    let device = Device::detect(settings.force_cpu);
    let engine_factory = Arc::new(WhisperEngineFactory::new(
        settings.provider,
        device,
        settings.whisper_binary.clone(),
        settings.openai_api_key.clone(),
        settings.openai_base_url.clone(),
    ));

    let state = AppState {
        engine_factory,
        settings: settings.clone(),
        device,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(
        %addr,
        device = device.as_str(),
        compute_type = device.compute_type(),
        max_workers = settings.max_workers,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
