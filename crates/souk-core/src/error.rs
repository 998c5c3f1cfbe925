//! Error types for the souk system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoukError {
    /// Login or session resolution failed. Deliberately carries no
    /// detail: callers must not learn whether the username existed or
    /// which part of a presented token was bad.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("mail delivery failed: {0}")]
    Mail(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl SoukError {
    /// Not-found sentinel for a user, keyed however the lookup was made
    /// (id, username, or email).
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "user".into(),
            id: id.into(),
        }
    }
}

pub type SoukResult<T> = Result<T, SoukError>;
