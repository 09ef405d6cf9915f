//! Cart action dispatcher.
//!
//! Carts live server-side, keyed by an opaque cart ID stored in the session.
//! The service is the single intent-submission point: UI handlers submit
//! [`CartAction`]s here and never touch cart internals. Storage is a moka
//! cache so abandoned carts age out on their own.

use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use uuid::Uuid;

use forkful_core::{Cart, CartAction};

/// Carts kept at most this long after the last action.
const CART_IDLE: Duration = Duration::from_secs(24 * 60 * 60);

/// Upper bound on concurrently held carts.
const CART_CAPACITY: u64 = 10_000;

/// Holds every live cart and applies actions to them.
///
/// Cloning is cheap; the underlying cache is shared.
#[derive(Clone)]
pub struct CartService {
    carts: Cache<String, Cart>,
}

impl CartService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            carts: Cache::builder()
                .max_capacity(CART_CAPACITY)
                .time_to_idle(CART_IDLE)
                .build(),
        }
    }

    /// Mint a fresh cart ID. The cart itself materializes on first dispatch.
    #[must_use]
    pub fn mint_cart_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Immutable snapshot of the cart with `cart_id`.
    ///
    /// Unknown IDs (including expired carts) read as the empty cart, which
    /// matches the reducer's treatment of stale references.
    pub async fn snapshot(&self, cart_id: &str) -> Cart {
        self.carts.get(cart_id).await.unwrap_or_else(Cart::empty)
    }

    /// Apply one action to the cart with `cart_id` and return the new state.
    ///
    /// Never fails: the transition function absorbs invalid input.
    pub async fn dispatch(&self, cart_id: &str, action: CartAction) -> Cart {
        let current = self.snapshot(cart_id).await;
        let next = current.apply(action, Utc::now());
        self.carts.insert(cart_id.to_string(), next.clone()).await;
        next
    }

    /// Drop the cart with `cart_id` entirely.
    pub async fn discard(&self, cart_id: &str) {
        self.carts.invalidate(cart_id).await;
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
