//! Domain models for the storefront.

pub mod cart;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartLine};
pub use product::{NewProduct, Product};
pub use session::{CurrentAdmin, keys as session_keys};
pub use user::AdminUser;
