//! Authentication service — registration, login, session resolution,
//! email verification, and password reset orchestration.

use souk_core::error::{SoukError, SoukResult};
use souk_core::mailer::Mailer;
use souk_core::models::business::CreateBusiness;
use souk_core::models::user::{CreateUser, User, UserId};
use souk_core::repository::{BusinessRepository, UserRepository};
use souk_mail::templates;
use tracing::warn;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Session token lifetime in seconds.
    pub expires_in: u64,
}

/// Authentication service.
///
/// Generic over the repository and mailer collaborators so that the auth
/// layer has no dependency on any storage or transport crate.
pub struct AuthService<U: UserRepository, B: BusinessRepository, M: Mailer> {
    user_repo: U,
    business_repo: B,
    mailer: M,
    config: AuthConfig,
}

impl<U: UserRepository, B: BusinessRepository, M: Mailer> AuthService<U, B, M> {
    pub fn new(user_repo: U, business_repo: B, mailer: M, config: AuthConfig) -> Self {
        Self {
            user_repo,
            business_repo,
            mailer,
            config,
        }
    }

    /// Register a new business owner.
    ///
    /// After the identity write succeeds, the post-registration step
    /// creates the owner's storefront record and dispatches the
    /// verification email. The dispatch is fire-and-forget: a mail
    /// transport failure is logged and never rolls back the
    /// registration.
    pub async fn register(&self, input: RegisterInput) -> SoukResult<User> {
        if input.password.chars().count() < self.config.min_password_length {
            return Err(SoukError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let password_hash =
            password::hash_password(&input.password, self.config.pepper.as_deref())?;

        let user = self
            .user_repo
            .create(CreateUser {
                username: input.username,
                email: input.email,
                password_hash,
            })
            .await?;

        // Post-registration orchestration: storefront first, then the
        // verification email.
        self.business_repo
            .create(CreateBusiness {
                name: user.username.clone(),
                owner_id: user.id,
            })
            .await?;

        if let Err(e) = self.issue_verification(&user).await {
            warn!(user_id = %user.id, error = %e, "verification email dispatch failed");
        }

        Ok(user)
    }

    /// Authenticate a user with username + password.
    ///
    /// An unknown username and a wrong password produce the same
    /// `InvalidCredentials` error.
    pub async fn authenticate(&self, username: &str, password: &str) -> SoukResult<User> {
        let user = match self.user_repo.find_by_username(username).await {
            Ok(user) => user,
            Err(SoukError::NotFound { .. }) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => return Err(e),
        };

        if !password::verify_password(password, &user.password_hash, self.config.pepper.as_deref())
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Authenticate and issue a session token.
    pub async fn login(&self, username: &str, password: &str) -> SoukResult<LoginOutput> {
        let user = self.authenticate(username, password).await?;
        let access_token = token::issue_access_token(&user, &self.config)?;

        Ok(LoginOutput {
            access_token,
            token_type: "bearer".into(),
            expires_in: self.config.access_token_lifetime_secs,
        })
    }

    /// Resolve a presented session token back to its user.
    ///
    /// Every failure mode (bad signature, expired token, malformed
    /// claims, unknown user, storage fault) collapses into
    /// `InvalidCredentials` so callers cannot distinguish a bad token
    /// from a bad login.
    pub async fn resolve(&self, token: &str) -> SoukResult<User> {
        let claims = token::decode_access_token(token, &self.config)
            .map_err(|_| SoukError::InvalidCredentials)?;

        self.user_repo
            .find_by_id(UserId(claims.id))
            .await
            .map_err(|_| SoukError::InvalidCredentials)
    }

    /// Issue an email-verification token and dispatch the verification
    /// email.
    ///
    /// Called exactly once per account, from [`register`](Self::register);
    /// never re-issued on login.
    pub async fn issue_verification(&self, user: &User) -> SoukResult<String> {
        let token = token::issue_verification_token(user, &self.config)?;

        let link = format!(
            "{}/verification/?token={token}",
            self.config.public_base_url
        );
        let (subject, body) = templates::verification_email(&link);
        self.mailer
            .send(std::slice::from_ref(&user.email), &subject, &body)
            .await?;

        Ok(token)
    }

    /// Redeem an email-verification token.
    ///
    /// Redemption is idempotent: a second redemption of the same valid
    /// token succeeds without re-saving or firing any side effect. A
    /// token whose user no longer exists is treated as forged.
    pub async fn redeem_verification(&self, token: &str) -> SoukResult<User> {
        let claims = token::decode_access_token(token, &self.config)?;

        let mut user = match self.user_repo.find_by_id(UserId(claims.id)).await {
            Ok(user) => user,
            Err(SoukError::NotFound { .. }) => {
                return Err(AuthError::TokenInvalid("unknown user".into()).into());
            }
            Err(e) => return Err(e),
        };

        if user.is_verified {
            return Ok(user);
        }

        user.is_verified = true;
        self.user_repo.save(&user).await?;
        Ok(user)
    }

    /// Issue a password-reset token for the account bound to `email` and
    /// dispatch the reset email.
    ///
    /// Unlike login, an unknown email fails loudly with the not-found
    /// sentinel: the reset flow is initiated by the account holder, not
    /// guessed at.
    pub async fn request_password_reset(&self, email: &str) -> SoukResult<String> {
        let user = self.user_repo.find_by_email(email).await?;

        let token = token::issue_reset_token(&user, &self.config)?;

        let link = format!(
            "{}/reset-password/?token={token}",
            self.config.public_base_url
        );
        let (subject, body) = templates::password_reset_email(&link);
        self.mailer
            .send(std::slice::from_ref(&user.email), &subject, &body)
            .await?;

        Ok(token)
    }

    /// Redeem a password-reset token and replace the stored password
    /// hash.
    ///
    /// This is the one boundary that distinguishes `TokenExpired` from
    /// `TokenInvalid` from internal faults. The `action` discriminator
    /// is asserted before the identity lookup, so a session or
    /// verification token presented here is rejected outright.
    pub async fn redeem_password_reset(&self, token: &str, new_password: &str) -> SoukResult<User> {
        let claims = token::decode_reset_token(token, &self.config)?;

        if new_password.chars().count() < self.config.min_password_length {
            return Err(SoukError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let mut user = match self.user_repo.find_by_id(UserId(claims.id)).await {
            Ok(user) => user,
            Err(SoukError::NotFound { .. }) => {
                return Err(AuthError::TokenInvalid("unknown user".into()).into());
            }
            Err(e) => return Err(e),
        };

        user.password_hash =
            password::hash_password(new_password, self.config.pepper.as_deref())?;
        self.user_repo.save(&user).await?;
        Ok(user)
    }
}
