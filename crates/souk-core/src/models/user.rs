//! User domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Typed user identifier.
///
/// Authorization checks compare these ids, never whole records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Argon2id PHC-format hash. Never the plaintext.
    pub password_hash: String,
    /// False until the email verification token is redeemed; transitions
    /// false -> true exactly once.
    pub is_verified: bool,
    pub join_date: DateTime<Utc>,
}

/// Fields required to create a new user record.
///
/// The password arrives already hashed: the credential store hashes it
/// before the registration flow hands the record to the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
