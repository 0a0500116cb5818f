use serde::Serialize;

/// A contiguous span of transcribed speech.
///
/// `words` is populated only when word-level timestamp granularity was
/// requested; with segment granularity the field is omitted from the
/// serialized output entirely rather than rendered as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

/// A single word with its start/end boundaries in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
}
