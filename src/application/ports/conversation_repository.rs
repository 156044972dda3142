use crate::domain::{Conversation, ConversationId, Message, UserId};
use async_trait::async_trait;

use super::RepositoryError;

/// Storage for conversations and their append-only message log.
///
/// Each method is one atomic unit; no transaction spans several calls.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create_conversation(&self, conversation: &Conversation)
    -> Result<(), RepositoryError>;

    /// Returns the conversation only if it exists and belongs to `owner_id`.
    async fn find_conversation(
        &self,
        id: ConversationId,
        owner_id: UserId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Most recent `limit` messages, oldest first.
    async fn get_messages(
        &self,
        conversation_id: ConversationId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError>;
}
