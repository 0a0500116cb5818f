mod info;
mod transcriptions;

pub use info::{docs_handler, info_handler, root_handler};
pub use transcriptions::transcriptions_handler;
