//! Business logic services.

pub mod auth;
pub mod validator;

pub use auth::{AuthError, AuthService};
pub use validator::{CartValidationClient, ValidatedCart, ValidatedLine, ValidationError};
