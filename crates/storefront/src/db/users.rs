//! Admin user repository for database operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::user::AdminUser;

/// Repository for admin user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an admin user and their password hash by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let row: Option<(i32, String, chrono::DateTime<chrono::Utc>, String)> = sqlx::query_as(
            r"
            SELECT id, username, created_at, password_hash
            FROM admin_user
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(id, username, created_at, password_hash)| {
            (
                AdminUser {
                    id: id.into(),
                    username,
                    created_at,
                },
                password_hash,
            )
        }))
    }

    /// Check whether an admin user exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, username: &str) -> Result<bool, RepositoryError> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM admin_user WHERE username = $1")
            .bind(username)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Create an admin user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// unique violations on the username).
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(
            r"
            INSERT INTO admin_user (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, created_at
            ",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }
}
