//! Business domain model.
//!
//! Every registered user owns exactly one business record, created as
//! part of the registration flow and named after the username until the
//! owner fills in the details.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserId};

/// Typed business identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub i64);

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    /// Stored filename of the uploaded logo, served by the static layer.
    pub logo: Option<String>,
    pub owner_id: UserId,
}

impl Business {
    /// Ownership check by typed id.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner_id == user.id
    }
}

/// Fields required to create a new business record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusiness {
    pub name: String,
    pub owner_id: UserId,
}

/// Fields that can be updated on an existing business.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateBusiness {
    pub name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}
