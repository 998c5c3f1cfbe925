//! Authentication configuration.

/// Configuration for the authentication service.
///
/// Loaded once at process start and injected at construction; the
/// signing secret is never re-read per call, and changing it invalidates
/// every previously issued token.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for HMAC-SHA256 token signing (`SECRET2`).
    pub token_secret: String,
    /// Token issuer (`iss` claim).
    pub token_issuer: String,
    /// Session token lifetime in seconds (default: 900 = 15 minutes).
    pub access_token_lifetime_secs: u64,
    /// Email-verification token lifetime in seconds (default: 86_400 = 24 hours).
    pub verification_token_lifetime_secs: u64,
    /// Password-reset token lifetime in seconds (default: 1_800 = 30 minutes).
    pub reset_token_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
    /// Minimum password length for policy enforcement.
    pub min_password_length: usize,
    /// Public base URL embedded in verification and reset links
    /// (e.g. `http://localhost:8000`).
    pub public_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_issuer: "souk".into(),
            access_token_lifetime_secs: 900,
            verification_token_lifetime_secs: 86_400,
            reset_token_lifetime_secs: 1_800,
            pepper: None,
            min_password_length: 8,
            public_base_url: "http://localhost:8000".into(),
        }
    }
}
