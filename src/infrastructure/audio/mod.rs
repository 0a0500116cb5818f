mod device;
mod engine_factory;
mod openai_whisper_engine;
mod whisper_cli_engine;

pub use device::Device;
pub use engine_factory::{EngineProvider, WhisperEngineFactory};
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use whisper_cli_engine::WhisperCliEngine;
