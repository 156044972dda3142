mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AuthSettings, CONFIG_FILE_STEM, DatabaseSettings, ENV_PREFIX, LlmBackendSettings, LlmSettings,
    LoggingSettings, ServerSettings, Settings,
};
