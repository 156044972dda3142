use super::{ConversationId, MessageRole};

/// One entry of the history a client sends with a turn.
///
/// `role` is `None` when the client used a role this backend does not know;
/// such entries are tolerated but never persisted or forwarded to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnMessage {
    pub role: Option<MessageRole>,
    pub content: String,
}

impl TurnMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Parses a wire role leniently: unknown roles become `None`.
    pub fn from_wire(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.parse().ok(),
            content: content.into(),
        }
    }

    pub fn is_from(&self, role: MessageRole) -> bool {
        self.role == Some(role)
    }
}

/// A single chat turn: the visible history plus the conversation it continues, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnRequest {
    pub messages: Vec<TurnMessage>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub reply_text: String,
    pub suggested_topic: Option<String>,
    pub conversation_id: ConversationId,
}
