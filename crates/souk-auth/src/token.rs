//! Signed-token codec: HMAC-SHA256 (HS256) claim sets over the shared
//! process secret.
//!
//! Session and verification tokens share the [`AccessClaims`] shape;
//! password-reset tokens carry [`ResetClaims`] with an `action`
//! discriminator so they cannot be replayed as session tokens (and vice
//! versa). Every claim set is issued with explicit `iat`/`exp`, checked
//! uniformly on decode.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use souk_core::models::user::User;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Discriminator claim value carried by password-reset tokens.
pub const RESET_PASSWORD_ACTION: &str = "reset_password";

/// Claims embedded in session and email-verification tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User ID.
    pub id: i64,
    pub username: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

impl AccessClaims {
    fn new(user: &User, lifetime_secs: u64, issuer: &str) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: user.id.0,
            username: user.username.clone(),
            iss: issuer.into(),
            iat: now,
            exp: now + lifetime_secs as i64,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Claims embedded in password-reset tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    /// User ID.
    pub id: i64,
    pub email: String,
    /// Always [`RESET_PASSWORD_ACTION`]; asserted on decode.
    pub action: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

fn encode_claims<T: Serialize>(claims: &T, config: &AuthConfig) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(config.token_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| AuthError::Crypto(format!("token encode: {e}")))
}

fn decode_claims<T: DeserializeOwned>(token: &str, config: &AuthConfig) -> Result<T, AuthError> {
    let key = DecodingKey::from_secret(config.token_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.token_issuer]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    jsonwebtoken::decode::<T>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Issue a signed session token for an authenticated user.
pub fn issue_access_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    let claims = AccessClaims::new(user, config.access_token_lifetime_secs, &config.token_issuer);
    encode_claims(&claims, config)
}

/// Issue the email-verification token embedded in the verification link.
pub fn issue_verification_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    let claims = AccessClaims::new(
        user,
        config.verification_token_lifetime_secs,
        &config.token_issuer,
    );
    encode_claims(&claims, config)
}

/// Decode and verify a session or verification token.
pub fn decode_access_token(token: &str, config: &AuthConfig) -> Result<AccessClaims, AuthError> {
    decode_claims(token, config)
}

/// Issue a password-reset token bound to the account's email address.
pub fn issue_reset_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = ResetClaims {
        id: user.id.0,
        email: user.email.clone(),
        action: RESET_PASSWORD_ACTION.into(),
        iss: config.token_issuer.clone(),
        iat: now,
        exp: now + config.reset_token_lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };
    encode_claims(&claims, config)
}

/// Decode and verify a password-reset token.
///
/// A structurally valid token whose `action` claim is missing or not
/// [`RESET_PASSWORD_ACTION`] is rejected as invalid: a stolen session or
/// verification token cannot be replayed against the reset flow.
pub fn decode_reset_token(token: &str, config: &AuthConfig) -> Result<ResetClaims, AuthError> {
    let claims: ResetClaims = decode_claims(token, config)?;
    if claims.action != RESET_PASSWORD_ACTION {
        return Err(AuthError::TokenInvalid(format!(
            "unexpected action claim: {}",
            claims.action
        )));
    }
    Ok(claims)
}
