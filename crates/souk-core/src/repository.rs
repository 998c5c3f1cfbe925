//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations translate their
//! backend's failures into [`SoukError`] before returning; in particular
//! a missing record is always the [`SoukError::NotFound`] sentinel, never
//! an untranslated driver error.

use crate::error::SoukResult;
use crate::models::business::{Business, BusinessId, CreateBusiness, UpdateBusiness};
use crate::models::product::{CreateProduct, Product, ProductId};
use crate::models::user::{CreateUser, User, UserId};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

pub trait UserRepository: Send + Sync {
    /// Create a new user. Fails with `AlreadyExists` if the username or
    /// email is taken.
    fn create(&self, input: CreateUser) -> impl Future<Output = SoukResult<User>> + Send;
    fn find_by_id(&self, id: UserId) -> impl Future<Output = SoukResult<User>> + Send;
    fn find_by_username(&self, username: &str) -> impl Future<Output = SoukResult<User>> + Send;
    fn find_by_email(&self, email: &str) -> impl Future<Output = SoukResult<User>> + Send;
    /// Persist updated field values for an existing user.
    fn save(&self, user: &User) -> impl Future<Output = SoukResult<()>> + Send;
}

pub trait BusinessRepository: Send + Sync {
    fn create(&self, input: CreateBusiness) -> impl Future<Output = SoukResult<Business>> + Send;
    fn find_by_owner(&self, owner_id: UserId) -> impl Future<Output = SoukResult<Business>> + Send;
    fn update(
        &self,
        id: BusinessId,
        input: UpdateBusiness,
    ) -> impl Future<Output = SoukResult<Business>> + Send;
}

pub trait ProductRepository: Send + Sync {
    fn create(&self, input: CreateProduct) -> impl Future<Output = SoukResult<Product>> + Send;
    fn find_by_id(&self, id: ProductId) -> impl Future<Output = SoukResult<Product>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = SoukResult<PaginatedResult<Product>>> + Send;
    fn delete(&self, id: ProductId) -> impl Future<Output = SoukResult<()>> + Send;
}
