use async_trait::async_trait;

use crate::domain::UserId;

/// Turns a bearer session token into the user it was issued to.
///
/// Issuance happens in the login flow; this side only checks tokens.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid session token")]
    InvalidToken,
    #[error("session expired")]
    Expired,
    #[error("session verification failed: {0}")]
    Backend(String),
}
