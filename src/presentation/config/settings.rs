use std::path::PathBuf;

use crate::application::services::DEFAULT_MAX_WORKERS;
use crate::infrastructure::audio::EngineProvider;

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub api_key: String,
    pub max_workers: usize,
    pub provider: EngineProvider,
    pub whisper_binary: PathBuf,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub force_cpu: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);
        let api_key = std::env::var("API_KEY").unwrap_or_else(|_| "dummy_api_key".to_string());
        let max_workers = std::env::var("MAX_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_MAX_WORKERS);
        let provider = std::env::var("ENGINE_PROVIDER")
            .ok()
            .and_then(|p| EngineProvider::parse(&p))
            .unwrap_or(EngineProvider::Local);
        let whisper_binary = std::env::var("WHISPER_BIN")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("whisper-bridge"));
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let openai_base_url = std::env::var("OPENAI_BASE_URL").ok();
        let force_cpu = flag("FORCE_CPU");
        let json_logs = flag("LOG_JSON");

        Self {
            port,
            api_key,
            max_workers,
            provider,
            whisper_binary,
            openai_api_key,
            openai_base_url,
            force_cpu,
            json_logs,
        }
    }
}

fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| {
            let v = v.to_ascii_lowercase();
            v == "1" || v == "true" || v == "yes"
        })
        .unwrap_or(false)
}
