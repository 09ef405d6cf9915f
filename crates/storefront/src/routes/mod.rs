//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Restaurant directory (supports ?q= and ?cuisine=)
//! GET  /health                 - Health check
//!
//! # Restaurants
//! GET  /restaurants/:id        - Restaurant menu (supports ?category=)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add item (returns count badge, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout + Orders
//! POST /checkout               - Place a mock order from the cart
//! GET  /orders                 - Order history (this session)
//!
//! # Food Listings
//! GET  /listings               - Listing directory (supports ?q=)
//! GET  /listings/new           - New listing form
//! POST /listings               - Create listing
//! GET  /listings/:id           - Listing detail
//! GET  /listings/:id/edit      - Edit listing form
//! POST /listings/:id           - Update listing
//! POST /listings/:id/delete    - Delete listing
//!
//! # Auth (mocked)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action (any well-formed email)
//! POST /auth/logout            - Logout action
//!
//! # Profile (requires auth)
//! GET  /profile                - Profile page
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod listings;
pub mod orders;
pub mod profile;
pub mod restaurants;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Exercises the listing store, the only stateful dependency.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    // A readable listing store means the snapshot loaded at startup.
    let _ = state.listings().len().await;
    StatusCode::OK
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the food listing routes router.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listings::index).post(listings::create))
        .route("/new", get(listings::new))
        .route("/{id}", get(listings::show).post(listings::update))
        .route("/{id}/edit", get(listings::edit))
        .route("/{id}/delete", post(listings::delete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health checks
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        // Restaurant directory
        .route("/", get(home::home))
        .route("/restaurants/{id}", get(restaurants::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout + orders
        .route("/checkout", post(orders::checkout))
        .route("/orders", get(orders::index))
        // Food listing routes
        .nest("/listings", listing_routes())
        // Auth routes
        .nest("/auth", auth_routes())
        // Profile (extractor enforces login)
        .route("/profile", get(profile::show))
}
