mod engine_factory;
mod transcription_engine;

pub use engine_factory::EngineFactory;
pub use transcription_engine::{
    EngineOutput, EngineRequest, LanguageDetection, RawSegment, RawWord, SegmentStream,
    TranscriptionEngine, TranscriptionError,
};
