//! Profile page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{session_keys, CurrentUser, Order};

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/show.html")]
pub struct ProfileTemplate {
    pub user: CurrentUser,
    pub order_count: usize,
}

/// Display the signed-in user's profile.
#[instrument(skip(user, session))]
pub async fn show(RequireAuth(user): RequireAuth, session: Session) -> impl IntoResponse {
    let order_count = session
        .get::<Vec<Order>>(session_keys::ORDERS)
        .await
        .ok()
        .flatten()
        .map_or(0, |orders| orders.len());

    ProfileTemplate { user, order_count }
}
