pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Settings;
pub use error::{ApiError, ErrorKind};
pub use router::create_router;
pub use state::AppState;
