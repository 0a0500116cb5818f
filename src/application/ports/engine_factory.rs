use std::sync::Arc;

use async_trait::async_trait;

use super::{TranscriptionEngine, TranscriptionError};

/// Builds one fresh engine instance per request from the requested model
/// identifier. Instances are owned by the request and never pooled across
/// requests; implementations may cache model artifacts internally.
#[async_trait]
pub trait EngineFactory: Send + Sync {
    async fn create(&self, model: &str) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError>;
}
