use async_trait::async_trait;

use crate::domain::TranscriptionOptions;

/// A segment as emitted by an inference engine, before shaping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub words: Vec<RawWord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// Language identification reported alongside the segment sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDetection {
    pub language: String,
    pub probability: f64,
}

/// Lazy, single-pass, finite sequence of segments. The result shaper is the
/// only consumer and always drains it fully.
pub type SegmentStream = Box<dyn Iterator<Item = Result<RawSegment, TranscriptionError>> + Send>;

pub struct EngineOutput {
    pub segments: SegmentStream,
    pub detection: LanguageDetection,
}

/// Per-call knobs forwarded to the engine, derived from validated options.
#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub language: Option<String>,
    pub initial_prompt: Option<String>,
    pub word_timestamps: bool,
    pub vad_filter: bool,
    pub min_silence_duration_ms: u32,
}

impl EngineRequest {
    pub fn from_options(options: &TranscriptionOptions) -> Self {
        Self {
            language: options.language.clone(),
            initial_prompt: options.initial_prompt.clone(),
            word_timestamps: options.word_timestamps,
            vad_filter: options.vad_filter,
            min_silence_duration_ms: options.min_silence_duration_ms,
        }
    }
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes one audio blob. `extension` is the lowercased file
    /// extension hint. Engine-level failures propagate unmodified.
    async fn transcribe(
        &self,
        audio: &[u8],
        extension: &str,
        request: &EngineRequest,
    ) -> Result<EngineOutput, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscriptionError {
    /// Input-class failures are translated to 400 at the API boundary;
    /// everything else surfaces as 500.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnsupportedFormat(_) | Self::InvalidInput(_))
    }
}
