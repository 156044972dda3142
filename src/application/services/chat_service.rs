use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::RepositoryError;
use crate::application::services::{
    ConversationStore, DispatchError, ProviderDispatcher, extract_topic,
};
use crate::domain::{ConversationId, MessageRole, TurnMessage, TurnRequest, TurnResult, UserId};

pub const SYSTEM_PROMPT: &str = "You are ErudioAI, a friendly study assistant for school and college students.
- Explain topics briefly and clearly.
- Use simple language and bullet points.
- Stay focused on the topic the student asked about.
- After your explanation, add a final line in this exact format:
TOPIC_NAME: <short topic name>";

/// Title used when a turn carries no user-authored message.
pub const DEFAULT_CONVERSATION_TITLE: &str = "New chat";

/// Stand-in history sent to providers when the request has nothing usable.
pub const DEFAULT_GREETING: &str = "Hello";

/// Runs one chat turn: resolve conversation, store input, ask the model, store reply.
pub struct ChatService {
    store: ConversationStore,
    dispatcher: Arc<ProviderDispatcher>,
}

impl ChatService {
    pub fn new(store: ConversationStore, dispatcher: Arc<ProviderDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    #[instrument(skip_all, fields(owner_id = %owner_id, messages = request.messages.len()))]
    pub async fn handle_turn(
        &self,
        owner_id: UserId,
        request: &TurnRequest,
    ) -> Result<TurnResult, ChatTurnError> {
        let requested_id = parse_conversation_id(request.conversation_id.as_deref());
        let fallback_title = request
            .messages
            .iter()
            .find(|m| m.is_from(MessageRole::User))
            .map(|m| m.content.as_str())
            .unwrap_or(DEFAULT_CONVERSATION_TITLE);

        let conversation = self
            .store
            .resolve(requested_id, owner_id, fallback_title)
            .await?;

        // An assistant (or unknown) tail is history, not new input.
        match request.messages.last() {
            Some(last) if last.is_from(MessageRole::User) => {
                self.store
                    .append_message(conversation.id, MessageRole::User, &last.content)
                    .await?;
            }
            _ => debug!("Last message is not user-authored, nothing to store"),
        }

        let history = provider_history(&request.messages);
        let raw_reply = self.dispatcher.dispatch(&history, SYSTEM_PROMPT).await?;

        let reply = extract_topic(&raw_reply);
        self.store
            .append_message(conversation.id, MessageRole::Assistant, &reply.clean_text)
            .await?;

        info!(
            conversation_id = %conversation.id,
            topic = reply.topic.as_deref().unwrap_or("-"),
            "Chat turn completed"
        );

        Ok(TurnResult {
            reply_text: reply.clean_text,
            suggested_topic: reply.topic,
            conversation_id: conversation.id,
        })
    }
}

fn parse_conversation_id(raw: Option<&str>) -> Option<ConversationId> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(conversation_id = raw, error = %e, "Ignoring malformed conversation id");
            None
        }
    }
}

fn provider_history(messages: &[TurnMessage]) -> Vec<TurnMessage> {
    let history: Vec<TurnMessage> = messages
        .iter()
        .filter(|m| m.role.is_some())
        .cloned()
        .collect();

    if history.is_empty() {
        vec![TurnMessage::user(DEFAULT_GREETING)]
    } else {
        history
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatTurnError {
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
    #[error("provider: {0}")]
    Provider(#[from] DispatchError),
}
