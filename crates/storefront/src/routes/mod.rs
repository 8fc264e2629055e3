//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (product listing)
//! GET  /health                 - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page shell
//! GET  /cart/items             - Validated item list fragment
//! GET  /cart/count             - Cart count badge fragment
//! POST /cart/add               - Add product (badge + toast, triggers cart-updated)
//! POST /cart/update            - Adjust quantity by delta (triggers cart-updated)
//! POST /cart/remove            - Remove product (triggers cart-updated)
//!
//! # API
//! POST /api/cart/validate      - Re-price a proposed cart from the catalog
//!
//! # Admin
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action
//! POST /admin/logout           - Logout action
//! GET  /admin                  - Dashboard (requires auth)
//! POST /admin/products/add     - Create product
//! POST /admin/products/{id}/edit   - Update product
//! POST /admin/products/{id}/delete - Delete product
//! ```

pub mod admin;
pub mod api;
pub mod auth;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/products/add", post(admin::add_product))
        .route("/products/{id}/edit", post(admin::edit_product))
        .route("/products/{id}/delete", post(admin::delete_product))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Cart validation API
        .route("/api/cart/validate", post(api::validate_cart))
        // Admin routes
        .nest("/admin", admin_routes())
}
