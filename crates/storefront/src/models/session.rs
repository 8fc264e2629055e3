//! Session-related types.
//!
//! The session is the cart's persistent store: a per-visitor, string-keyed
//! key-value map surviving page loads. The cart lives under a fixed key as a
//! serialized line array.

use serde::{Deserialize, Serialize};

use chaussup_core::AdminUserId;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's username.
    pub username: String,
}

/// Session keys.
pub mod keys {
    /// Key for the serialized cart line array.
    pub const CART: &str = "cart";

    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
