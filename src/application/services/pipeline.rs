use crate::application::ports::{EngineRequest, TranscriptionEngine, TranscriptionError};
use crate::domain::{
    file_extension, FileTranscript, TranscriptionOptions, UploadedFile, SUPPORTED_EXTENSIONS,
};

use super::shape_transcript;

/// Processes one uploaded file end to end: extension re-check, engine call,
/// shaping. This is the unit of concurrent execution; the first error
/// encountered propagates.
pub async fn process_file(
    engine: &dyn TranscriptionEngine,
    file: &UploadedFile,
    options: &TranscriptionOptions,
) -> Result<FileTranscript, TranscriptionError> {
    let extension = file_extension(&file.filename);
    // Primary enforcement happens in the parameter validator; this guards the
    // engine against callers that skip it.
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(TranscriptionError::UnsupportedFormat(extension));
    }

    let request = EngineRequest::from_options(options);
    let output = engine.transcribe(&file.data, &extension, &request).await?;
    shape_transcript(&file.filename, output, options.word_timestamps)
}
