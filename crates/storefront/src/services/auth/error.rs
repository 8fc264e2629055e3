//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password (uniform on purpose).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// New password does not meet requirements.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    Hash(String),

    /// Database access failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
