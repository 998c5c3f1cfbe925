//! Password hashing and verification using Argon2id.
//!
//! Hashing uses OWASP-recommended parameters (memory: 19 MiB,
//! iterations: 2, parallelism: 1) with a random salt per call. An
//! optional pepper (server-side secret) can be prepended to the
//! password on both sides.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

fn argon2() -> Result<Argon2<'static>, AuthError> {
    // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
    let params = argon2::Params::new(19_456, 2, 1, None)
        .map_err(|e| AuthError::Crypto(format!("argon2 params error: {e}")))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

fn peppered<'a>(password: &'a str, pepper: Option<&str>) -> std::borrow::Cow<'a, str> {
    match pepper {
        Some(p) => format!("{p}{password}").into(),
        None => password.into(),
    }
}

/// Hash a plaintext password into a PHC-format Argon2id string.
///
/// The salt is freshly generated for each call, so hashing the same
/// password twice produces different strings that both verify.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    let input = peppered(password, pepper);
    let salt = SaltString::generate(&mut OsRng);
    argon2()?
        .hash_password(input.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Crypto(format!("password hash error: {e}")))
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// A malformed stored hash is treated as a mismatch, never an error:
/// the caller always gets a plain yes/no.
pub fn verify_password(password: &str, hash: &str, pepper: Option<&str>) -> bool {
    let Ok(parsed_hash) = argon2::PasswordHash::new(hash) else {
        return false;
    };
    let input = peppered(password, pepper);
    Argon2::default()
        .verify_password(input.as_bytes(), &parsed_hash)
        .is_ok()
}
