//! Product catalog models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use chaussup_core::ProductId;

/// A catalog product row.
///
/// The product table is the pricing authority: cart validation always
/// re-reads `price` from here, never from client-submitted data.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or updating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl Product {
    /// Build an in-memory product for tests.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub fn fixture(id: i32, name: &str, price: &str) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            image_url: None,
            created_at: Utc::now(),
        }
    }
}
