use crate::application::ports::{EngineOutput, TranscriptionError};
use crate::domain::{FileTranscript, Segment, Word};

/// Drains the engine's lazy segment sequence and builds the public result
/// shape. Text fields are trimmed; `words` is carried only when word-level
/// granularity was requested. Pure and deterministic given the sequence.
pub fn shape_transcript(
    filename: &str,
    output: EngineOutput,
    word_timestamps: bool,
) -> Result<FileTranscript, TranscriptionError> {
    let mut segments = Vec::new();
    for raw in output.segments {
        let raw = raw?;
        let words = word_timestamps.then(|| {
            raw.words
                .iter()
                .map(|w| Word {
                    word: w.word.trim().to_string(),
                    start: w.start,
                    end: w.end,
                })
                .collect()
        });
        segments.push(Segment {
            text: raw.text.trim().to_string(),
            start: raw.start,
            end: raw.end,
            words,
        });
    }

    let text = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Ok(FileTranscript {
        filename: filename.to_string(),
        detected_language: output.detection.language,
        language_probability: output.detection.probability,
        text,
        segments,
    })
}
