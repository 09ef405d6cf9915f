//! Home page handler: the restaurant directory.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use forkful_core::Restaurant;
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Home page query parameters.
#[derive(Debug, Deserialize, Default)]
pub struct HomeQuery {
    /// Free-text search over restaurant names and cuisines.
    pub q: Option<String>,
    /// Restrict to a single cuisine.
    pub cuisine: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    pub restaurants: Vec<Restaurant>,
    pub promoted: Vec<Restaurant>,
    pub cuisines: Vec<String>,
    pub query: String,
    pub active_cuisine: Option<String>,
}

/// Display the restaurant directory.
///
/// With no filters this shows a promoted strip above the full directory;
/// once a search or cuisine filter is active the promoted strip is hidden
/// and only matches are shown.
#[instrument(skip(state, user))]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(params): Query<HomeQuery>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let filtering = !query.trim().is_empty() || params.cuisine.is_some();

    let restaurants = state
        .catalog()
        .search(&query, params.cuisine.as_deref())
        .into_iter()
        .cloned()
        .collect();

    let promoted = if filtering {
        Vec::new()
    } else {
        state.catalog().promoted().into_iter().cloned().collect()
    };

    HomeTemplate {
        user,
        restaurants,
        promoted,
        cuisines: state.catalog().cuisines(),
        query,
        active_cuisine: params.cuisine,
    }
}
