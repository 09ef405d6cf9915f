//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use serde::{Deserialize, Serialize};

use forkful_core::{Email, UserId};

/// Session-stored user identity.
///
/// Authentication is mocked: any email is accepted at login and no
/// credential is ever verified. This struct is all the "account" there is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Opaque user ID minted at login.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name (defaults to the email local part).
    pub name: String,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the cart ID.
    pub const CART_ID: &str = "cart_id";

    /// Key for the session's placed orders.
    pub const ORDERS: &str = "orders";
}
