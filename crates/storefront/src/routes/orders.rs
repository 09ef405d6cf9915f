//! Checkout and order history handlers.
//!
//! Orders are mock records kept in the session: checkout snapshots the cart
//! into an [`Order`], prepends it to the session's order list, and clears
//! the cart. Nothing is charged and nothing leaves the process.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use forkful_core::{CartAction, OrderId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::filters;
use crate::models::{session_keys, Order};
use crate::state::AppState;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub delivery_address: String,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrderIndexTemplate {
    pub orders: Vec<Order>,
}

/// Read the session's order history, newest first.
async fn session_orders(session: &Session) -> Vec<Order> {
    session
        .get::<Vec<Order>>(session_keys::ORDERS)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Place a mock order from the current cart.
///
/// An empty (or missing) cart checks out to nothing: the visitor is sent
/// back to the cart page. On success the cart is cleared and the visitor
/// lands on the order history.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let Some(cart_id) = session
        .get::<String>(session_keys::CART_ID)
        .await
        .ok()
        .flatten()
    else {
        return Redirect::to("/cart").into_response();
    };

    let cart = state.carts().snapshot(&cart_id).await;
    let address = if form.delivery_address.trim().is_empty() {
        "123 Main Street".to_string()
    } else {
        form.delivery_address
    };

    let Some(order) = Order::from_cart(
        &cart,
        OrderId::from(Uuid::new_v4().to_string()),
        Utc::now(),
        address,
    ) else {
        return Redirect::to("/cart").into_response();
    };

    tracing::info!(order_id = %order.id, total = %order.total_amount, "placed mock order");

    let mut orders = session_orders(&session).await;
    orders.insert(0, order);
    if let Err(e) = session.insert(session_keys::ORDERS, &orders).await {
        tracing::error!("Failed to save order to session: {e}");
    }

    state.carts().dispatch(&cart_id, CartAction::Clear).await;

    Redirect::to("/orders").into_response()
}

/// Display the session's order history.
#[instrument(skip(session))]
pub async fn index(session: Session) -> impl IntoResponse {
    OrderIndexTemplate {
        orders: session_orders(&session).await,
    }
}
