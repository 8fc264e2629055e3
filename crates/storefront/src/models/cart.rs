//! The shopping cart data model.
//!
//! A [`Cart`] is an ordered sequence of [`CartLine`], unique by product id.
//! Repeated adds increment the existing line's quantity instead of appending
//! a duplicate. A line whose quantity reaches zero is removed entirely; the
//! cart never retains a zero-quantity line.
//!
//! The cart is a pure value type. Persistence (the session store) and
//! rendering are layered on top in `routes::cart`; prices carried on lines
//! are display hints only - the validation endpoint re-prices everything from
//! the product table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chaussup_core::ProductId;

use crate::models::product::Product;

/// One product entry in the cart with its requested quantity.
///
/// Serialized shape matches the wire and storage contract:
/// `{id, name, price, quantity}` with `price` as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

/// An ordered collection of cart lines, unique by product id.
///
/// Insertion order is preserved but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a cart from existing lines.
    ///
    /// Lines with non-positive quantity are dropped to uphold the invariant
    /// that every retained line has `quantity > 0`.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            });
        }
    }

    /// Remove the line for a product entirely.
    ///
    /// Returns `true` if a line was removed; removing an absent product is a
    /// no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// A resulting quantity of zero or below removes the line. Returns `true`
    /// if the cart changed; unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return false;
        };

        let new_quantity = i64::from(line.quantity) + delta;
        if new_quantity <= 0 {
            self.remove(id)
        } else {
            // Bounded above by u32::MAX via the i64 arithmetic
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            true
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, price: &str) -> Product {
        Product::fixture(id, name, price)
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        assert_eq!(cart.lines().len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.id, ProductId::new(1));
        assert_eq!(line.name, "Shoe");
        assert_eq!(line.price.to_string(), "49.99");
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_add_existing_product_increments_without_duplicate() {
        let mut cart = Cart::new();
        let shoe = product(1, "Shoe", "49.99");
        cart.add(&shoe);
        cart.add(&shoe);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        assert!(cart.update_quantity(ProductId::new(1), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_below_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        assert!(cart.update_quantity(ProductId::new(1), -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_positive_delta_accumulates() {
        let mut cart = Cart::new();
        let socks = product(2, "Socks", "12.90");
        cart.add(&socks);
        cart.add(&socks);
        cart.add(&socks);

        assert!(cart.update_quantity(ProductId::new(2), 5));
        assert_eq!(cart.lines()[0].quantity, 8);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        assert!(!cart.update_quantity(ProductId::new(99), 1));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        let a = product(1, "A", "10.00");
        let b = product(2, "B", "20.00");
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, "C", "15.90"));
        cart.add(&product(1, "A", "12.90"));
        cart.add(&product(2, "B", "24.90"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);

        let ids: Vec<i32> = restored.lines().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_serializes_as_plain_array_with_numeric_price() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Shoe", "49.99"));

        let json = serde_json::to_value(&cart).unwrap();
        let expected = serde_json::json!([
            {"id": 1, "name": "Shoe", "price": 49.99, "quantity": 1}
        ]);
        assert_eq!(json, expected);
    }

    #[test]
    fn test_from_lines_drops_zero_quantity() {
        let cart = Cart::from_lines(vec![
            CartLine {
                id: ProductId::new(1),
                name: "A".to_string(),
                price: Decimal::new(1000, 2),
                quantity: 0,
            },
            CartLine {
                id: ProductId::new(2),
                name: "B".to_string(),
                price: Decimal::new(2000, 2),
                quantity: 2,
            },
        ]);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id, ProductId::new(2));
    }
}
