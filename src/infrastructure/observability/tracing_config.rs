use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of the settings file.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_override = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment,
            level: logging.level.clone(),
            json_format: logging.enable_json || json_override,
        }
    }

    pub fn default_directives(&self) -> String {
        format!("{},erudio=debug,tower_http=debug,sqlx=warn", self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_settings(Environment::default(), &LoggingSettings::default())
    }
}
