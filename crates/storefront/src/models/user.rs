//! Back-office admin user model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use chaussup_core::AdminUserId;

/// An admin account row (password hash is fetched separately and never
/// carried on this struct).
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
