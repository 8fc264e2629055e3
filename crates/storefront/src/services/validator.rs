//! HTTP client for the cart validation endpoint.
//!
//! The cart widget never trusts its locally stored prices: before rendering,
//! it submits the current lines to `POST /api/cart/validate` and paints
//! whatever the service returns. The endpoint is consumed as a black-box
//! contract - any transport error, non-success status, or unparseable body is
//! a single surfaced failure. No retries; default reqwest timeouts apply.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use chaussup_core::ProductId;

use crate::models::cart::CartLine;

/// Errors that can occur when validating a cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// HTTP request failed (connect, timeout, or body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Validation service returned status {0}")]
    Status(u16),
}

/// Request body for the validation endpoint: `{items: CartLine[]}`.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    items: &'a [CartLine],
}

/// One re-priced line from the validation response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatedLine {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// The authoritative cart as computed by the validation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatedCart {
    pub items: Vec<ValidatedLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Client for the cart validation endpoint.
///
/// Cheaply cloneable via `Arc`; the endpoint URL is fixed at construction.
#[derive(Clone)]
pub struct CartValidationClient {
    inner: Arc<CartValidationClientInner>,
}

struct CartValidationClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl CartValidationClient {
    /// Create a new validation client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(CartValidationClientInner {
                client: reqwest::Client::new(),
                endpoint: endpoint.into(),
            }),
        }
    }

    /// Submit cart lines for validation and return the re-priced cart.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Http` on transport or parse failure, and
    /// `ValidationError::Status` when the service rejects the request.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn validate(&self, lines: &[CartLine]) -> Result<ValidatedCart, ValidationError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .json(&ValidateRequest { items: lines })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ValidationError::Status(status.as_u16()));
        }

        let validated: ValidatedCart = response.json().await?;
        debug!(
            items = validated.items.len(),
            total = %validated.total,
            "Cart validated"
        );

        Ok(validated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let lines = vec![CartLine {
            id: ProductId::new(1),
            name: "Shoe".to_string(),
            price: Decimal::new(4999, 2),
            quantity: 2,
        }];
        let body = serde_json::to_value(ValidateRequest { items: &lines }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "items": [{"id": 1, "name": "Shoe", "price": 49.99, "quantity": 2}]
            })
        );
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "items": [
                {"id": 1, "name": "Duo Asymétrique Forêt", "price": 12.9, "quantity": 2, "subtotal": 25.8}
            ],
            "total": 25.8
        }"#;

        let cart: ValidatedCart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].subtotal, Decimal::new(258, 1));
        assert_eq!(cart.total, Decimal::new(258, 1));
    }

    #[test]
    fn test_response_with_no_items() {
        let cart: ValidatedCart = serde_json::from_str(r#"{"items": [], "total": 0}"#).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }
}
