use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::TurnMessage;

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(60);

/// Tries LLM backends in configured order until one produces a non-empty reply.
///
/// Attempts run one after another. A backend that errors, exceeds the attempt
/// timeout or answers with blank text counts as failed and is not retried.
pub struct ProviderDispatcher {
    backends: Vec<Arc<dyn LlmClient>>,
    attempt_timeout: Duration,
}

impl ProviderDispatcher {
    pub fn new(backends: Vec<Arc<dyn LlmClient>>, attempt_timeout: Duration) -> Self {
        Self {
            backends,
            attempt_timeout,
        }
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    #[instrument(skip_all, fields(history_len = history.len(), backends = self.backends.len()))]
    pub async fn dispatch(
        &self,
        history: &[TurnMessage],
        system_instruction: &str,
    ) -> Result<String, DispatchError> {
        if self.backends.is_empty() {
            return Err(DispatchError::NoBackends);
        }

        let mut attempts = Vec::with_capacity(self.backends.len());

        for backend in &self.backends {
            let started = Instant::now();
            let outcome = tokio::time::timeout(
                self.attempt_timeout,
                backend.complete(history, system_instruction),
            )
            .await
            .unwrap_or(Err(LlmClientError::Timeout(self.attempt_timeout)))
            .and_then(|reply| {
                if reply.trim().is_empty() {
                    Err(LlmClientError::EmptyResponse)
                } else {
                    Ok(reply)
                }
            });

            let elapsed_ms = started.elapsed().as_millis() as u64;
            match outcome {
                Ok(reply) => {
                    info!(backend = backend.name(), elapsed_ms, "LLM backend answered");
                    return Ok(reply);
                }
                Err(error) => {
                    warn!(
                        backend = backend.name(),
                        elapsed_ms,
                        error = %error,
                        "LLM backend failed, trying next"
                    );
                    attempts.push(BackendFailure {
                        backend: backend.name().to_string(),
                        error,
                    });
                }
            }
        }

        Err(DispatchError::ProviderExhausted { attempts })
    }
}

#[derive(Debug, Clone)]
pub struct BackendFailure {
    pub backend: String,
    pub error: LlmClientError,
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.backend, self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no LLM backends configured")]
    NoBackends,
    #[error("all LLM backends failed ({}); last error: {}", summarize(.attempts), last_of(.attempts))]
    ProviderExhausted { attempts: Vec<BackendFailure> },
}

impl DispatchError {
    /// The failure reported by the last backend that was tried.
    pub fn last_error(&self) -> Option<&LlmClientError> {
        match self {
            DispatchError::NoBackends => None,
            DispatchError::ProviderExhausted { attempts } => attempts.last().map(|a| &a.error),
        }
    }

    pub fn attempts(&self) -> &[BackendFailure] {
        match self {
            DispatchError::NoBackends => &[],
            DispatchError::ProviderExhausted { attempts } => attempts,
        }
    }
}

fn summarize(attempts: &[BackendFailure]) -> String {
    attempts
        .iter()
        .map(|a| a.backend.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn last_of(attempts: &[BackendFailure]) -> String {
    attempts
        .last()
        .map(|a| a.error.to_string())
        .unwrap_or_else(|| "none".to_string())
}
