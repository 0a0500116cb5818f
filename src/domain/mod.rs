mod catalog;
mod options;
mod segment;
mod transcript;
mod upload;

pub use catalog::{file_extension, SUPPORTED_EXTENSIONS, SUPPORTED_LANGUAGES, SUPPORTED_MODELS};
pub use options::{ResponseFormat, TimestampGranularity, TranscriptionOptions};
pub use segment::{Segment, Word};
pub use transcript::FileTranscript;
pub use upload::UploadedFile;
