//! Mock order types.
//!
//! Checkout converts the cart into an immutable order snapshot stored in the
//! session. There is no server-side order processing or payment handling;
//! the order exists so the orders screen has something real to render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forkful_core::{Cart, OrderId, OrderStatus, Price};

/// One item within a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub total_price: Price,
}

/// A placed order, snapshotted from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_name: String,
    pub items: Vec<OrderItem>,
    /// Item subtotal; the delivery fee is tracked separately.
    pub total_amount: Price,
    pub delivery_fee: Price,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub delivery_address: String,
    /// Display string copied from the restaurant, e.g. "25-35 min".
    pub estimated_delivery: String,
}

impl Order {
    /// Snapshot a non-empty cart into a freshly placed order.
    ///
    /// Returns `None` for an empty cart - there is nothing to order.
    #[must_use]
    pub fn from_cart(
        cart: &Cart,
        id: OrderId,
        placed_at: DateTime<Utc>,
        delivery_address: String,
    ) -> Option<Self> {
        let restaurant = cart.restaurant.as_ref()?;

        Some(Self {
            id,
            restaurant_name: restaurant.name.clone(),
            items: cart
                .lines
                .iter()
                .map(|line| OrderItem {
                    name: line.menu_item.name.clone(),
                    quantity: line.quantity,
                    total_price: line.total_price,
                })
                .collect(),
            total_amount: cart.total_amount,
            delivery_fee: restaurant.delivery_fee,
            status: OrderStatus::Placed,
            placed_at,
            delivery_address,
            estimated_delivery: restaurant.delivery_time.clone(),
        })
    }
}
