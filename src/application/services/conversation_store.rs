use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, MessageRole, UserId};

pub const TITLE_MAX_CHARS: usize = 40;
pub const TITLE_ELLIPSIS: &str = "...";

/// Conversation and message lifecycle on top of a [`ConversationRepository`].
pub struct ConversationStore {
    repository: Arc<dyn ConversationRepository>,
}

impl ConversationStore {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// Returns the caller's conversation, creating a fresh one when `conversation_id`
    /// is absent, unknown, or owned by someone else.
    ///
    /// A foreign conversation is indistinguishable from a missing one here: the
    /// caller silently gets a new conversation rather than an authorization error.
    #[instrument(skip(self, fallback_title), fields(owner_id = %owner_id))]
    pub async fn resolve(
        &self,
        conversation_id: Option<ConversationId>,
        owner_id: UserId,
        fallback_title: &str,
    ) -> Result<Conversation, RepositoryError> {
        if let Some(id) = conversation_id {
            match self.repository.find_conversation(id, owner_id).await? {
                Some(conversation) => return Ok(conversation),
                None => debug!(
                    conversation_id = %id,
                    "Conversation not found for owner, starting a new one"
                ),
            }
        }

        let conversation = Conversation::new(owner_id, conversation_title(fallback_title));
        self.repository.create_conversation(&conversation).await?;

        info!(conversation_id = %conversation.id, "Conversation created");
        Ok(conversation)
    }

    #[instrument(skip(self, text), fields(conversation_id = %conversation_id, role = %role))]
    pub async fn append_message(
        &self,
        conversation_id: ConversationId,
        role: MessageRole,
        text: &str,
    ) -> Result<Message, RepositoryError> {
        let message = Message::new(conversation_id, role, text.to_string());
        self.repository.append_message(&message).await?;
        Ok(message)
    }

    pub async fn messages(
        &self,
        conversation_id: ConversationId,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        self.repository.get_messages(conversation_id, limit).await
    }
}

/// First 40 characters of `source` followed by an ellipsis.
///
/// The ellipsis is appended even when nothing was cut off.
pub fn conversation_title(source: &str) -> String {
    let mut title: String = source.chars().take(TITLE_MAX_CHARS).collect();
    title.push_str(TITLE_ELLIPSIS);
    title
}
