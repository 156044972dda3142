mod jwt_session_verifier;

pub use jwt_session_verifier::{
    DEFAULT_TOKEN_TTL_DAYS, JwtConfigError, JwtSessionVerifier, SessionClaims,
};
