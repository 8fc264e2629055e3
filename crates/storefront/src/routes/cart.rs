//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session as a serialized line array; the
//! rendered item list and total always come from the validation endpoint, so
//! locally stored prices are display hints at best.
//!
//! Mutation handlers return the badge fragment and fire the `cart-updated`
//! trigger; the item list listens for it and re-fetches itself. Each refresh
//! issues its own validation request. The items container uses
//! `hx-sync="this:replace"` so a newly triggered refresh aborts the in-flight
//! one and only the latest response paints.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use chaussup_core::{ProductId, format_eur};

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::cart::Cart;
use crate::models::session_keys;
use crate::services::validator::{CartValidationClient, ValidatedCart};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_eur(rust_decimal::Decimal::ZERO),
            item_count: 0,
        }
    }
}

impl From<&ValidatedCart> for CartView {
    fn from(validated: &ValidatedCart) -> Self {
        Self {
            items: validated
                .items
                .iter()
                .map(|line| CartItemView {
                    id: line.id.as_i32(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: format_eur(line.price),
                    line_price: format_eur(line.subtotal),
                })
                .collect(),
            total: format_eur(validated.total),
            item_count: validated.items.iter().map(|l| l.quantity).sum(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// Absent or unreadable data yields an empty cart; a malformed stored cart is
/// logged and discarded rather than surfaced to the visitor.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(session_keys::CART).await {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("Discarding unreadable cart from session: {e}");
            Cart::new()
        }
    }
}

/// Save the cart to the session. Every mutation goes through here.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: i32,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
///
/// The page is only a shell; the items region fetches itself on load, so
/// opening the cart always triggers a fresh validation pass.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate;

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Inline error fragment shown when validation fails.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_error.html")]
pub struct CartErrorTemplate;

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Badge plus out-of-band toast, returned after an add.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub count: u32,
    pub message: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
pub async fn show() -> impl IntoResponse {
    CartShowTemplate
}

/// Render the validated item list fragment.
///
/// An empty cart renders the placeholder and a zero total without contacting
/// the validation service. Otherwise the current lines are submitted for
/// validation and the fragment is rebuilt from the response. On failure the
/// fragment is an inline error message; the stored cart is left untouched.
#[instrument(skip(state, session))]
pub async fn items(State(state): State<AppState>, session: Session) -> Response {
    let cart = load_cart(&session).await;
    render_items(&cart, state.validator()).await
}

/// Build the item list fragment for a cart, validating non-empty carts.
async fn render_items(cart: &Cart, validator: &CartValidationClient) -> Response {
    if cart.is_empty() {
        return CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response();
    }

    match validator.validate(cart.lines()).await {
        Ok(validated) => CartItemsTemplate {
            cart: CartView::from(&validated),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to validate cart: {e}");
            CartErrorTemplate.into_response()
        }
    }
}

/// Get the cart count badge fragment.
///
/// The count is the local quantity sum; no validation call is made.
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// The product descriptor comes from the catalog, never from the client.
/// Returns the badge fragment plus a transient toast, and triggers
/// `cart-updated` so open cart views refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let product = ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session).await;
    cart.add(&product);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartAddedTemplate {
            count: cart.item_count(),
            message: "Produit ajouté au panier !",
        },
    )
        .into_response())
}

/// Adjust a cart line's quantity by a signed delta (HTMX).
///
/// A resulting quantity of zero or below removes the line. Unknown product
/// ids are a no-op and skip the save.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateQuantityForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await;

    if cart.update_quantity(ProductId::new(form.product_id), form.delta) {
        save_cart(&session, &cart).await?;
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Remove a product from the cart entirely (HTMX).
///
/// Removing an absent product is a no-op and skips the save.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await;

    if cart.remove(ProductId::new(form.product_id)) {
        save_cart(&session, &cart).await?;
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::product::Product;
    use crate::services::validator::ValidatedLine;

    /// Endpoint no validation request can reach; any attempt to contact it
    /// surfaces as the error fragment.
    const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/api/cart/validate";

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_cart_view_has_zero_total() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.total, "0.00 €");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_cart_view_from_validated_cart() {
        let validated = ValidatedCart {
            items: vec![
                ValidatedLine {
                    id: ProductId::new(1),
                    name: "Duo Asymétrique Forêt".to_string(),
                    price: Decimal::new(1290, 2),
                    quantity: 2,
                    subtotal: Decimal::new(2580, 2),
                },
                ValidatedLine {
                    id: ProductId::new(3),
                    name: "Edition Limitée Océan".to_string(),
                    price: Decimal::new(1590, 2),
                    quantity: 1,
                    subtotal: Decimal::new(1590, 2),
                },
            ],
            total: Decimal::new(4170, 2),
        };

        let view = CartView::from(&validated);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].price, "12.90 €");
        assert_eq!(view.items[0].line_price, "25.80 €");
        assert_eq!(view.total, "41.70 €");
        assert_eq!(view.item_count, 3);
    }

    #[tokio::test]
    async fn test_render_items_empty_cart_skips_validation() {
        let validator = CartValidationClient::new(UNREACHABLE_ENDPOINT);

        let body = body_text(render_items(&Cart::new(), &validator).await).await;
        assert!(body.contains("Votre panier est vide"));
        assert!(body.contains("0.00 €"));
    }

    #[tokio::test]
    async fn test_render_items_unreachable_service_renders_error() {
        let validator = CartValidationClient::new(UNREACHABLE_ENDPOINT);
        let mut cart = Cart::new();
        cart.add(&Product::fixture(1, "Shoe", "49.99"));

        let body = body_text(render_items(&cart, &validator).await).await;
        assert!(body.contains("Erreur lors de la validation du panier"));
    }
}
