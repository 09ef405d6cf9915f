//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Cart IDs are stored in the session and mapped to in-memory carts. Every
//! mutation goes through [`CartService::dispatch`], so malformed input is
//! absorbed as a no-op rather than surfaced as an error page.
//!
//! [`CartService::dispatch`]: crate::services::CartService::dispatch

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
    Form,
};
use forkful_core::{Cart, CartAction, CartLineId, MenuItemId, RestaurantId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub restaurant_name: Option<String>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            restaurant_name: None,
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines.iter().map(CartLineView::from).collect(),
            restaurant_name: cart.restaurant.as_ref().map(|r| r.name.clone()),
            total: cart.total_amount.display(),
            item_count: cart.item_count,
        }
    }
}

impl From<&forkful_core::CartLine> for CartLineView {
    fn from(line: &forkful_core::CartLine) -> Self {
        Self {
            id: line.id.as_str().to_string(),
            name: line.menu_item.name.clone(),
            image: line.menu_item.image.clone(),
            quantity: line.quantity,
            unit_price: line.menu_item.price.display(),
            line_price: line.total_price.display(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart ID from the session.
async fn get_cart_id(session: &Session) -> Option<String> {
    session
        .get::<String>(session_keys::CART_ID)
        .await
        .ok()
        .flatten()
}

/// Get the cart ID from the session, minting one if missing.
async fn ensure_cart_id(session: &Session) -> String {
    if let Some(cart_id) = get_cart_id(session).await {
        return cart_id;
    }

    let cart_id = crate::services::CartService::mint_cart_id();
    if let Err(e) = session.insert(session_keys::CART_ID, &cart_id).await {
        tracing::error!("Failed to save cart ID to session: {e}");
    }
    cart_id
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub restaurant_id: String,
    pub menu_item_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Render the current cart as the items fragment with the update trigger set.
fn cart_items_response(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = match get_cart_id(&session).await {
        Some(cart_id) => CartView::from(&state.carts().snapshot(&cart_id).await),
        None => CartView::empty(),
    };

    CartShowTemplate { cart }
}

/// Add item to cart (HTMX).
///
/// Looks the item up in the catalog; an unknown restaurant or menu item is
/// absorbed as a no-op. Returns the count badge with an HTMX trigger so
/// other cart fragments refresh themselves.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let cart_id = ensure_cart_id(&session).await;
    let restaurant_id = RestaurantId::from(form.restaurant_id);
    let menu_item_id = MenuItemId::from(form.menu_item_id);

    let cart = match (
        state.catalog().restaurant(&restaurant_id),
        state.catalog().menu_item(&restaurant_id, &menu_item_id),
    ) {
        (Some(restaurant), Some(menu_item)) => {
            state
                .carts()
                .dispatch(
                    &cart_id,
                    CartAction::AddItem {
                        menu_item: menu_item.clone(),
                        restaurant: restaurant.clone(),
                    },
                )
                .await
        }
        _ => {
            tracing::warn!("Ignoring add for unknown catalog entry");
            state.carts().snapshot(&cart_id).await
        }
    };

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count,
        },
    )
        .into_response()
}

/// Update cart line quantity (HTMX).
///
/// Quantity zero removes the line; a negative quantity is absorbed as a
/// no-op inside the cart itself.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let Some(cart_id) = get_cart_id(&session).await else {
        return CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response();
    };

    let cart = state
        .carts()
        .dispatch(
            &cart_id,
            CartAction::UpdateQuantity {
                line_id: CartLineId::from(form.line_id),
                quantity: form.quantity,
            },
        )
        .await;

    cart_items_response(&cart)
}

/// Remove line from cart (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let Some(cart_id) = get_cart_id(&session).await else {
        return CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response();
    };

    let cart = state
        .carts()
        .dispatch(
            &cart_id,
            CartAction::RemoveItem {
                line_id: CartLineId::from(form.line_id),
            },
        )
        .await;

    cart_items_response(&cart)
}

/// Empty the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Response {
    let Some(cart_id) = get_cart_id(&session).await else {
        return CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response();
    };

    let cart = state.carts().dispatch(&cart_id, CartAction::Clear).await;
    cart_items_response(&cart)
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let count = match get_cart_id(&session).await {
        Some(cart_id) => state.carts().snapshot(&cart_id).await.item_count,
        None => 0,
    };

    CartCountTemplate { count }
}
