//! Cart validation API.
//!
//! `POST /api/cart/validate` re-prices a proposed cart against the product
//! table. Client-submitted names and prices are ignored; unknown product ids
//! are dropped from the result rather than rejected.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use chaussup_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::Result;
use crate::models::product::Product;
use crate::state::AppState;

/// A submitted cart line. Only `id` and `quantity` are trusted; any other
/// fields the client sends (name, price) are ignored by deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmittedLine {
    pub id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Request body: `{items: [{id, quantity}, ...]}`.
#[derive(Debug, Deserialize)]
pub struct ValidateCartRequest {
    #[serde(default)]
    pub items: Vec<SubmittedLine>,
}

/// One re-priced line in the response.
#[derive(Debug, Serialize)]
pub struct ValidatedLineResponse {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Response body: `{items: [...], total}`.
#[derive(Debug, Serialize)]
pub struct ValidateCartResponse {
    pub items: Vec<ValidatedLineResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Validate a proposed cart against the catalog.
#[instrument(skip(state, request), fields(items = request.items.len()))]
pub async fn validate_cart(
    State(state): State<AppState>,
    Json(request): Json<ValidateCartRequest>,
) -> Result<Json<ValidateCartResponse>> {
    let ids: Vec<i32> = request.items.iter().map(|i| i.id.as_i32()).collect();
    let products = ProductRepository::new(state.pool())
        .get_by_ids(&ids)
        .await?;

    Ok(Json(price_cart(&request.items, &products)))
}

/// Re-price submitted lines from catalog rows.
///
/// Preserves submission order, drops lines whose id has no catalog row, and
/// computes per-line subtotals and the cart total.
fn price_cart(items: &[SubmittedLine], products: &[Product]) -> ValidateCartResponse {
    let mut validated = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;

    for item in items {
        let Some(product) = products.iter().find(|p| p.id == item.id) else {
            continue;
        };

        let subtotal = product.price * Decimal::from(item.quantity);
        total += subtotal;
        validated.push(ValidatedLineResponse {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: item.quantity,
            subtotal,
        });
    }

    ValidateCartResponse {
        items: validated,
        total,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i32, quantity: u32) -> SubmittedLine {
        SubmittedLine {
            id: ProductId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_price_cart_reprices_from_catalog() {
        let products = vec![
            Product::fixture(1, "Duo Asymétrique Forêt", "12.90"),
            Product::fixture(2, "Pack Rebelle Arc-en-ciel", "24.90"),
        ];
        let response = price_cart(&[line(1, 2), line(2, 1)], &products);

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].subtotal.to_string(), "25.80");
        assert_eq!(response.items[1].subtotal.to_string(), "24.90");
        assert_eq!(response.total.to_string(), "50.70");
    }

    #[test]
    fn test_price_cart_drops_unknown_ids() {
        let products = vec![Product::fixture(1, "A", "10.00")];
        let response = price_cart(&[line(99, 3), line(1, 1)], &products);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, ProductId::new(1));
        assert_eq!(response.total.to_string(), "10.00");
    }

    #[test]
    fn test_price_cart_empty() {
        let response = price_cart(&[], &[]);
        assert!(response.items.is_empty());
        assert_eq!(response.total, Decimal::ZERO);
    }

    #[test]
    fn test_request_ignores_client_supplied_prices() {
        let json = r#"{
            "items": [{"id": 1, "name": "Shoe", "price": 0.01, "quantity": 2}]
        }"#;
        let request: ValidateCartRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn test_request_quantity_defaults_to_one() {
        let request: ValidateCartRequest =
            serde_json::from_str(r#"{"items": [{"id": 5}]}"#).unwrap();
        assert_eq!(request.items[0].quantity, 1);
    }

    #[test]
    fn test_response_serializes_numeric_prices() {
        let products = vec![Product::fixture(1, "A", "12.90")];
        let response = price_cart(&[line(1, 2)], &products);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    {"id": 1, "name": "A", "price": 12.9, "quantity": 2, "subtotal": 25.8}
                ],
                "total": 25.8
            })
        );
    }
}
