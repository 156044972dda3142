mod stub_server;

pub use in_memory_repository::InMemoryConversationRepository;
pub use scripted_llm_client::{Script, ScriptedLlmClient};
pub use static_session_verifier::StaticSessionVerifier;
pub use stub_server::spawn_stub;

use erudio::domain::UserId;
use uuid::Uuid;

pub fn new_user() -> UserId {
    UserId::from_uuid(Uuid::new_v4())
}
