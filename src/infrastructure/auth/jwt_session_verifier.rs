use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::ports::{AuthError, SessionVerifier};
use crate::domain::UserId;
use crate::presentation::config::AuthSettings;

/// Lifetime of tokens minted by the login flow.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried by a session token: the user's id and an expiry timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum JwtConfigError {
    #[error("missing JWT secret: set `auth.jwt_secret` or the {0} variable")]
    MissingSecret(String),
    #[error("unsupported JWT algorithm `{0}`, expected one of HS256, HS384, HS512")]
    UnsupportedAlgorithm(String),
}

/// Stateless bearer token check: HMAC-signed JWTs whose `sub` is the user id.
pub struct JwtSessionVerifier {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionVerifier {
    pub fn new(secret: &str, algorithm: Algorithm) -> Result<Self, JwtConfigError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtConfigError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// The secret comes from `auth.jwt_secret`, or else the variable named by
    /// `auth.jwt_secret_env`.
    pub fn from_settings(settings: &AuthSettings) -> Result<Self, JwtConfigError> {
        let secret = settings
            .jwt_secret
            .clone()
            .or_else(|| std::env::var(&settings.jwt_secret_env).ok())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| JwtConfigError::MissingSecret(settings.jwt_secret_env.clone()))?;

        let algorithm = settings
            .jwt_algorithm
            .trim()
            .to_uppercase()
            .parse::<Algorithm>()
            .map_err(|_| JwtConfigError::UnsupportedAlgorithm(settings.jwt_algorithm.clone()))?;

        Self::new(&secret, algorithm)
    }

    /// Signs a token for `user_id` that expires `ttl` from now.
    pub fn issue_token(&self, user_id: UserId, ttl: Duration) -> Result<String, AuthError> {
        let exp = (Utc::now() + ttl).timestamp().max(0) as u64;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Backend(e.to_string()))
    }
}

#[async_trait]
impl SessionVerifier for JwtSessionVerifier {
    #[instrument(skip_all)]
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                kind => {
                    debug!(reason = ?kind, "Rejected session token");
                    AuthError::InvalidToken
                }
            })?
            .claims;

        Uuid::parse_str(&claims.sub)
            .map(UserId::from_uuid)
            .map_err(|_| {
                debug!("Session token subject is not a user id");
                AuthError::InvalidToken
            })
    }
}
