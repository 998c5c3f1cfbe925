//! Authentication error types.

use souk_core::error::SoukError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for SoukError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => SoukError::InvalidCredentials,
            AuthError::TokenExpired => SoukError::TokenExpired,
            AuthError::TokenInvalid(msg) => SoukError::TokenInvalid(msg),
            AuthError::Crypto(msg) => SoukError::Crypto(msg),
        }
    }
}
