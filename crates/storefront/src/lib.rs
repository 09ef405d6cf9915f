//! Forkful Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

/// Build the application router with its middleware stack.
///
/// Sentry layers are applied in `main`, not here, so tests drive the same
/// router without an error-reporting backend.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::create_session_layer(state.config()))
        .with_state(state)
}
