/// Shape of the transcription response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    VerboseJson,
}

impl ResponseFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "verbose_json" => Some(Self::VerboseJson),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::VerboseJson => "verbose_json",
        }
    }
}

/// Timestamp resolution requested for transcription output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampGranularity {
    Segment,
    Word,
}

impl TimestampGranularity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "segment" => Some(Self::Segment),
            "word" => Some(Self::Word),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Word => "word",
        }
    }
}

/// Fully validated per-request transcription options.
///
/// Only the parameter validator constructs this; every field has already been
/// checked against the supported-value catalog.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    pub model: String,
    pub language: Option<String>,
    pub initial_prompt: Option<String>,
    pub vad_filter: bool,
    pub min_silence_duration_ms: u32,
    pub response_format: ResponseFormat,
    pub word_timestamps: bool,
}
