use serde::Serialize;

use super::Segment;

/// The shaped transcription result for a single uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileTranscript {
    pub filename: String,
    pub detected_language: String,
    pub language_probability: f64,
    pub text: String,
    pub segments: Vec<Segment>,
}
