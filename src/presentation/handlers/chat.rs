use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::TurnRequest;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::error::ApiError;
use crate::presentation::extractors::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::chat_types::{ChatRequest, ChatResponse};

#[tracing::instrument(skip_all, fields(user_id = %user_id))]
pub async fn chat_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if let Some(last) = request.messages.last() {
        tracing::debug!(
            role = %last.role,
            prompt = %sanitize_prompt(&last.content),
            conversation_id = request.conversation_id.as_deref().unwrap_or("-"),
            "Processing chat turn"
        );
    } else {
        tracing::warn!("Chat turn without messages, falling back to defaults");
    }

    let turn = TurnRequest::from(request);
    let result = state.chat_service.handle_turn(user_id, &turn).await?;

    Ok((StatusCode::OK, Json(ChatResponse::from(result))))
}
