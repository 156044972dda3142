use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_ATTEMPT_TIMEOUT;

pub const CONFIG_FILE_STEM: &str = "appsettings";
pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.{environment}.toml` and `APP__*`
    /// environment variables, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE_STEM).required(false))
            .add_source(
                File::with_name(&format!(
                    "{}.{}",
                    CONFIG_FILE_STEM,
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_attempt_timeout_seconds")]
    pub attempt_timeout_seconds: u64,
    /// Tried in order; the first backend with a non-empty reply wins.
    #[serde(default)]
    pub backends: Vec<LlmBackendSettings>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            attempt_timeout_seconds: default_attempt_timeout_seconds(),
            backends: Vec::new(),
        }
    }
}

/// One entry of the ordered backend list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum LlmBackendSettings {
    Gemini {
        model: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default = "default_gemini_api_key_env")]
        api_key_env: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible {
        #[serde(default)]
        name: Option<String>,
        base_url: String,
        model: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        api_key_env: Option<String>,
        #[serde(default)]
        max_tokens: Option<usize>,
        #[serde(default)]
        temperature: Option<f32>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

/// Verification parameters for the bearer tokens handed out by the login flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub jwt_secret: Option<String>,
    pub jwt_secret_env: String,
    pub jwt_algorithm: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_secret_env: "JWT_SECRET_KEY".to_string(),
            jwt_algorithm: "HS256".to_string(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_attempt_timeout_seconds() -> u64 {
    DEFAULT_ATTEMPT_TIMEOUT.as_secs()
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
