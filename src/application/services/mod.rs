mod dispatcher;
mod pipeline;
mod shaping;
mod validation;

pub use dispatcher::{dispatch, DEFAULT_MAX_WORKERS};
pub use pipeline::process_file;
pub use shaping::shape_transcript;
pub use validation::{validate_parameters, TranscriptionForm, ValidationError};
