//! Product domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SoukError, SoukResult};
use crate::models::business::BusinessId;

/// Typed product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub original_price: f64,
    pub new_price: f64,
    /// Derived from the two prices at listing time, never client-supplied.
    pub percentage_discount: f64,
    /// Stored filename of the product image, served by the static layer.
    pub image: Option<String>,
    pub date_published: DateTime<Utc>,
    pub business_id: BusinessId,
}

/// A new product listing as submitted by a business owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub original_price: f64,
    pub new_price: f64,
    pub business_id: BusinessId,
}

impl CreateProduct {
    /// Validate the listing and derive the discount percentage.
    ///
    /// The original price must be strictly positive; the discount is
    /// `(original - new) / original * 100`.
    pub fn into_product(self, id: ProductId, published: DateTime<Utc>) -> SoukResult<Product> {
        if self.original_price <= 0.0 {
            return Err(SoukError::Validation {
                message: "original_price must be greater than zero".into(),
            });
        }

        let percentage_discount =
            (self.original_price - self.new_price) / self.original_price * 100.0;

        Ok(Product {
            id,
            name: self.name,
            category: self.category,
            original_price: self.original_price,
            new_price: self.new_price,
            percentage_discount,
            image: None,
            date_published: published,
            business_id: self.business_id,
        })
    }
}
