//! Environment configuration.
//!
//! All settings are read once at startup. `SECRET2` (the token signing
//! secret) is required; everything else has a workable default.

use std::env;

use souk_auth::AuthConfig;
use souk_core::error::{SoukError, SoukResult};
use souk_mail::MailConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

impl Settings {
    pub fn from_env() -> SoukResult<Self> {
        let token_secret = env::var("SECRET2")
            .map_err(|_| SoukError::Internal("SECRET2 must be set".into()))?;

        let mut auth = AuthConfig {
            token_secret,
            ..AuthConfig::default()
        };
        if let Ok(base_url) = env::var("BASE_URL") {
            auth.public_base_url = base_url;
        }
        if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
            auth.pepper = Some(pepper);
        }

        let mut mail = MailConfig::default();
        if let Ok(host) = env::var("SMTP_HOST") {
            mail.smtp_host = host;
        }
        if let Ok(username) = env::var("EMAIL") {
            mail.username = username;
        }
        if let Ok(password) = env::var("PASS") {
            mail.password = password;
        }

        Ok(Self { auth, mail })
    }
}
