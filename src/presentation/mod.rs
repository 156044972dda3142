pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, LlmBackendSettings, LlmSettings, Settings};
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
