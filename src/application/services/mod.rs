mod chat_service;
mod conversation_store;
mod provider_dispatcher;
mod topic_extractor;

pub use chat_service::{
    ChatService, ChatTurnError, DEFAULT_CONVERSATION_TITLE, DEFAULT_GREETING, SYSTEM_PROMPT,
};
pub use conversation_store::{
    ConversationStore, TITLE_ELLIPSIS, TITLE_MAX_CHARS, conversation_title,
};
pub use provider_dispatcher::{
    BackendFailure, DEFAULT_ATTEMPT_TIMEOUT, DispatchError, ProviderDispatcher,
};
pub use topic_extractor::{ExtractedReply, TOPIC_MARKER, extract_topic};
