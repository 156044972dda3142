use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AuthError;
use crate::application::services::ChatTurnError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub r#type: String,
}

/// Everything a handler can fail with, mapped onto one JSON error shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(AuthError),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    ChatTurn(#[from] ChatTurnError),
    #[error("{0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Backend(msg) => ApiError::Internal(format!("session verification failed: {}", msg)),
            other => ApiError::Unauthorized(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ChatTurn(ChatTurnError::Provider(_)) => StatusCode::BAD_GATEWAY,
            ApiError::ChatTurn(ChatTurnError::Persistence(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "authentication_error",
            ApiError::BadRequest(_) => "invalid_request_error",
            ApiError::ChatTurn(ChatTurnError::Provider(_)) => "provider_error",
            ApiError::ChatTurn(ChatTurnError::Persistence(_)) => "persistence_error",
            ApiError::Internal(_) => "api_error",
        }
    }

    /// Text sent to the client. Storage and internal failures stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::ChatTurn(ChatTurnError::Persistence(_)) => {
                "the conversation could not be saved, please try again".to_string()
            }
            ApiError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() || status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                message: self.public_message(),
                r#type: self.error_type().to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
