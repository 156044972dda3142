mod conversation_repository;
mod llm_client;
mod repository_error;
mod session_verifier;

pub use conversation_repository::ConversationRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use session_verifier::{AuthError, SessionVerifier};
