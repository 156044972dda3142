mod backend_factory;
mod gemini_client;
mod openai_compatible_client;

pub use backend_factory::{LlmBackendFactory, LlmBackendFactoryError};
pub use gemini_client::{GEMINI_DEFAULT_BASE_URL, GeminiClient};
pub use openai_compatible_client::OpenAiCompatibleClient;
