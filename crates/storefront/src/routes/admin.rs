//! Admin dashboard and product management route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use chaussup_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::product::{NewProduct, Product};
use crate::state::AppState;

/// Product display data for the dashboard.
#[derive(Clone)]
pub struct AdminProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Plain decimal string (e.g. "12.90") so it can prefill form inputs.
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for AdminProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price.round_dp(2)),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Product create/edit form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: String,
}

impl ProductForm {
    fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: if self.image_url.is_empty() {
                None
            } else {
                Some(self.image_url)
            },
        }
    }
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub products: Vec<AdminProductView>,
}

/// Display the admin dashboard.
#[instrument(skip(state, admin))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<DashboardTemplate> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(DashboardTemplate {
        username: admin.username,
        products: products.iter().map(AdminProductView::from).collect(),
    })
}

/// Create a product.
#[instrument(skip(state, _admin, form))]
pub async fn add_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    ProductRepository::new(state.pool())
        .create(&form.into_new_product())
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Update a product.
#[instrument(skip(state, _admin, form))]
pub async fn edit_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(id);
    ProductRepository::new(state.pool())
        .update(product_id, &form.into_new_product())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    Ok(Redirect::to("/admin"))
}

/// Delete a product.
#[instrument(skip(state, _admin))]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let product_id = ProductId::new(id);
    let deleted = ProductRepository::new(state.pool()).delete(product_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("product {product_id}")));
    }

    Ok(Redirect::to("/admin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_form_empty_image_becomes_none() {
        let form = ProductForm {
            name: "Test".to_string(),
            description: String::new(),
            price: Decimal::new(1290, 2),
            image_url: String::new(),
        };
        assert!(form.into_new_product().image_url.is_none());
    }

    #[test]
    fn test_admin_view_formats_price_plain() {
        let product = Product::fixture(1, "Duo", "12.9");
        let view = AdminProductView::from(&product);
        assert_eq!(view.price, "12.90");
        assert_eq!(view.image_url, "");
    }
}
