//! Database seeding command.
//!
//! Idempotent: creates the default admin account if it does not exist and the
//! demo catalog if the product table is empty. The admin password comes from
//! the command line, never from source.

use rust_decimal::Decimal;
use tracing::info;

use chaussup_storefront::db;
use chaussup_storefront::db::products::ProductRepository;
use chaussup_storefront::db::users::UserRepository;
use chaussup_storefront::models::product::NewProduct;
use chaussup_storefront::services::auth::hash_password;

/// Username of the default admin account.
const ADMIN_USERNAME: &str = "admin";

/// The demo catalog (name, description, price in cents, image url).
const DEMO_PRODUCTS: &[(&str, &str, i64, &str)] = &[
    (
        "Duo Asymétrique Forêt",
        "Une chaussette verte sapin, une marron écorce. L'économie circulaire commence dans votre tiroir !",
        1290,
        "/static/images/duo_forest.png",
    ),
    (
        "Pack Rebelle Arc-en-ciel",
        "7 couleurs, 0 paires identiques. Parce que la conformité c'est ringard.",
        2490,
        "/static/images/rebel_pack.jpg",
    ),
    (
        "Edition Limitée Océan",
        "Bleu marine + turquoise recyclé. Sauvez les mers, un pied à la fois.",
        1590,
        "/static/images/ocean_limited.jpg",
    ),
    (
        "Classics Dépareillés Noir & Blanc",
        "L'intemporel revisité. Élégance asymétrique garantie.",
        1190,
        "/static/images/black_white.jpg",
    ),
];

/// Seed the admin account and demo products.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(admin_password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let users = UserRepository::new(&pool);
    if users.exists(ADMIN_USERNAME).await? {
        info!("Admin user already exists");
    } else {
        let password_hash = hash_password(admin_password)?;
        users.create(ADMIN_USERNAME, &password_hash).await?;
        info!("Admin user created (username: {ADMIN_USERNAME})");
    }

    let products = ProductRepository::new(&pool);
    let existing = products.count().await?;
    if existing > 0 {
        info!("{existing} products already exist in database");
    } else {
        for (name, description, cents, image_url) in DEMO_PRODUCTS {
            products
                .create(&NewProduct {
                    name: (*name).to_string(),
                    description: (*description).to_string(),
                    price: Decimal::new(*cents, 2),
                    image_url: Some((*image_url).to_string()),
                })
                .await?;
        }
        info!("Added {} demo products", DEMO_PRODUCTS.len());
    }

    info!("Database seeding complete!");
    Ok(())
}
