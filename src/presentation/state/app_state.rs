use std::sync::Arc;

use crate::application::ports::SessionVerifier;
use crate::application::services::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub session_verifier: Arc<dyn SessionVerifier>,
}

impl AppState {
    pub fn new(chat_service: Arc<ChatService>, session_verifier: Arc<dyn SessionVerifier>) -> Self {
        Self {
            chat_service,
            session_verifier,
        }
    }
}
