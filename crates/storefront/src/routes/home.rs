//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use chaussup_core::format_eur;

use crate::db::products::ProductRepository;
use crate::error::Result;
use crate::models::product::Product;
use crate::state::AppState;

/// Product display data for the home page.
#[derive(Clone)]
pub struct ProductCard {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_eur(product.price),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Home page template.
///
/// The cart badge in the shared layout populates itself via HTMX, so the page
/// only carries the catalog.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCard>,
}

/// Display the home page with the full catalog.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(HomeTemplate {
        products: products.iter().map(ProductCard::from).collect(),
    })
}
