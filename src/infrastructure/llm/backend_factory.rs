use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmBackendSettings, LlmSettings};

use super::{GeminiClient, OpenAiCompatibleClient};

pub struct LlmBackendFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmBackendFactoryError {
    #[error("missing API key for {backend}: set `api_key` or the {env_var} variable")]
    MissingApiKey { backend: String, env_var: String },
    #[error("backend initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmBackendFactory {
    pub fn create(
        settings: &LlmBackendSettings,
        timeout: Duration,
    ) -> Result<Arc<dyn LlmClient>, LlmBackendFactoryError> {
        match settings {
            LlmBackendSettings::Gemini {
                model,
                api_key,
                api_key_env,
                base_url,
            } => {
                let key = resolve_api_key(api_key.as_deref(), Some(api_key_env.as_str())).ok_or_else(
                    || LlmBackendFactoryError::MissingApiKey {
                        backend: format!("gemini:{}", model),
                        env_var: api_key_env.clone(),
                    },
                )?;
                tracing::info!(model = %model, "Configuring Gemini backend");
                let client = GeminiClient::new(base_url.clone(), key, model.clone(), timeout)
                    .map_err(|e| LlmBackendFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            LlmBackendSettings::OpenAiCompatible {
                name,
                base_url,
                model,
                api_key,
                api_key_env,
                max_tokens,
                temperature,
            } => {
                let label = name
                    .clone()
                    .unwrap_or_else(|| format!("openai_compatible:{}", model));
                let key = resolve_api_key(api_key.as_deref(), api_key_env.as_deref());
                tracing::info!(backend = %label, base_url = %base_url, "Configuring OpenAI-compatible backend");
                let client = OpenAiCompatibleClient::new(
                    label,
                    base_url.clone(),
                    key,
                    model.clone(),
                    timeout,
                )
                .map_err(|e| LlmBackendFactoryError::InitializationFailed(e.to_string()))?
                .with_sampling(*max_tokens, *temperature);
                Ok(Arc::new(client))
            }
        }
    }

    /// Builds every configured backend in order, leaving out the ones that
    /// cannot be constructed (typically a missing API key).
    pub fn create_all(settings: &LlmSettings) -> Vec<Arc<dyn LlmClient>> {
        let timeout = Duration::from_secs(settings.attempt_timeout_seconds);

        settings
            .backends
            .iter()
            .filter_map(|backend| match Self::create(backend, timeout) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping LLM backend");
                    None
                }
            })
            .collect()
    }
}

fn resolve_api_key(explicit: Option<&str>, env_var: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| env_var.and_then(|name| std::env::var(name).ok()))
        .filter(|k| !k.trim().is_empty())
}
