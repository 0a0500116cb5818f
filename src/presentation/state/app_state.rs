use std::sync::Arc;

use crate::application::ports::EngineFactory;
use crate::infrastructure::audio::Device;
use crate::presentation::config::Settings;

pub struct AppState {
    pub engine_factory: Arc<dyn EngineFactory>,
    pub settings: Settings,
    pub device: Device,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            engine_factory: Arc::clone(&self.engine_factory),
            settings: self.settings.clone(),
            device: self.device,
        }
    }
}
