use serde::{Deserialize, Serialize};

use crate::domain::{TurnMessage, TurnRequest, TurnResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply_text: String,
    pub suggested_topic: Option<String>,
    pub conversation_id: String,
}

impl From<ChatRequest> for TurnRequest {
    fn from(request: ChatRequest) -> Self {
        TurnRequest {
            messages: request
                .messages
                .into_iter()
                .map(|m| TurnMessage::from_wire(&m.role, m.content))
                .collect(),
            conversation_id: request.conversation_id,
        }
    }
}

impl From<TurnResult> for ChatResponse {
    fn from(result: TurnResult) -> Self {
        ChatResponse {
            reply_text: result.reply_text,
            suggested_topic: result.suggested_topic,
            conversation_id: result.conversation_id.to_string(),
        }
    }
}
