use std::time::Duration;

use async_trait::async_trait;

use crate::domain::TurnMessage;

/// A single LLM backend: history plus system instruction in, reply text out.
///
/// Implementations map `TurnMessage` roles onto their own wire vocabulary and
/// skip entries whose role is unrecognized.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Short label used in logs and error reports, e.g. `gemini:gemini-2.0-flash`.
    fn name(&self) -> &str;

    async fn complete(
        &self,
        history: &[TurnMessage],
        system_instruction: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("empty response")]
    EmptyResponse,
}
