use super::{ConversationId, UserId};
use chrono::{DateTime, Utc};

/// A chat thread owned by exactly one user. Ownership never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(user_id: UserId, title: String) -> Self {
        Self {
            id: ConversationId::new(),
            user_id,
            title,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
