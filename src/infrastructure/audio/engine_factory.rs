use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{EngineFactory, TranscriptionEngine, TranscriptionError};

use super::{Device, OpenAiWhisperEngine, WhisperCliEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineProvider {
    Local,
    OpenAi,
}

impl EngineProvider {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "local" => Some(Self::Local),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }
}

/// Builds a fresh engine per request for the requested model size.
pub struct WhisperEngineFactory {
    provider: EngineProvider,
    device: Device,
    binary: PathBuf,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl WhisperEngineFactory {
    pub fn new(
        provider: EngineProvider,
        device: Device,
        binary: PathBuf,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            provider,
            device,
            binary,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl EngineFactory for WhisperEngineFactory {
    async fn create(
        &self,
        model: &str,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match self.provider {
            EngineProvider::Local => Ok(Arc::new(WhisperCliEngine::new(
                self.binary.clone(),
                model,
                self.device,
            ))),
            EngineProvider::OpenAi => {
                let key = self.api_key.clone().ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for the remote whisper provider".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    key,
                    self.base_url.clone(),
                    model,
                )))
            }
        }
    }
}
