//! In-memory collaborator implementations shared by the integration
//! tests: repositories backed by mutex-guarded vectors and a mailer
//! that records every dispatch instead of sending it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use souk_auth::AuthConfig;
use souk_core::error::{SoukError, SoukResult};
use souk_core::mailer::Mailer;
use souk_core::models::business::{Business, BusinessId, CreateBusiness, UpdateBusiness};
use souk_core::models::user::{CreateUser, User, UserId};
use souk_core::repository::{BusinessRepository, UserRepository};

pub fn test_config() -> AuthConfig {
    AuthConfig {
        token_secret: "integration-test-secret".into(),
        token_issuer: "souk-test".into(),
        ..AuthConfig::default()
    }
}

#[derive(Clone, Default)]
pub struct MemUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    next_id: Arc<AtomicI64>,
}

impl MemUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemUserRepository {
    async fn create(&self, input: CreateUser) -> SoukResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == input.username || u.email == input.email)
        {
            return Err(SoukError::AlreadyExists {
                entity: "user".into(),
            });
        }

        let user = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
            is_verified: false,
            join_date: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> SoukResult<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| SoukError::user_not_found(id.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> SoukResult<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| SoukError::user_not_found(username))
    }

    async fn find_by_email(&self, email: &str) -> SoukResult<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| SoukError::user_not_found(email))
    }

    async fn save(&self, user: &User) -> SoukResult<()> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| SoukError::user_not_found(user.id.to_string()))?;
        *slot = user.clone();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemBusinessRepository {
    businesses: Arc<Mutex<Vec<Business>>>,
    next_id: Arc<AtomicI64>,
}

impl MemBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BusinessRepository for MemBusinessRepository {
    async fn create(&self, input: CreateBusiness) -> SoukResult<Business> {
        let business = Business {
            id: BusinessId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            name: input.name,
            city: None,
            region: None,
            description: None,
            logo: None,
            owner_id: input.owner_id,
        };
        self.businesses.lock().unwrap().push(business.clone());
        Ok(business)
    }

    async fn find_by_owner(&self, owner_id: UserId) -> SoukResult<Business> {
        self.businesses
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.owner_id == owner_id)
            .cloned()
            .ok_or_else(|| SoukError::NotFound {
                entity: "business".into(),
                id: format!("owner={owner_id}"),
            })
    }

    async fn update(&self, id: BusinessId, input: UpdateBusiness) -> SoukResult<Business> {
        let mut businesses = self.businesses.lock().unwrap();
        let business = businesses
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SoukError::NotFound {
                entity: "business".into(),
                id: id.to_string(),
            })?;

        if let Some(name) = input.name {
            business.name = name;
        }
        if let Some(city) = input.city {
            business.city = Some(city);
        }
        if let Some(region) = input.region {
            business.region = Some(region);
        }
        if let Some(description) = input.description {
            business.description = Some(description);
        }
        if let Some(logo) = input.logo {
            business.logo = Some(logo);
        }
        Ok(business.clone())
    }
}

/// A recorded outbound email.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

/// Mailer double that records every dispatch; can be switched into a
/// failing mode to exercise the fire-and-forget paths.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail: Arc<Mutex<bool>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, recipients: &[String], subject: &str, html_body: &str) -> SoukResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(SoukError::Mail("smtp transport unavailable".into()));
        }
        self.sent.lock().unwrap().push(SentMail {
            recipients: recipients.to_vec(),
            subject: subject.into(),
            html_body: html_body.into(),
        });
        Ok(())
    }
}
