//! Restaurant detail handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use forkful_core::{MenuItem, Restaurant, RestaurantId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Restaurant page query parameters.
#[derive(Debug, Deserialize, Default)]
pub struct MenuQuery {
    /// Restrict the menu to a single category.
    pub category: Option<String>,
}

/// Restaurant detail template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/show.html")]
pub struct RestaurantShowTemplate {
    pub restaurant: Restaurant,
    pub menu: Vec<MenuItem>,
    pub categories: Vec<String>,
    pub active_category: Option<String>,
}

/// Display a restaurant's menu.
///
/// The category filter is applied server-side; an unknown category simply
/// yields an empty menu section rather than an error.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<MenuQuery>,
) -> Result<RestaurantShowTemplate, AppError> {
    let id = RestaurantId::from(id);
    let restaurant = state
        .catalog()
        .restaurant(&id)
        .ok_or_else(|| AppError::NotFound(format!("restaurant {id}")))?
        .clone();

    let full_menu = state.catalog().menu(&id);
    let categories = state.catalog().categories(&id);

    let menu = match params.category.as_deref() {
        Some(category) if category != "All" => full_menu
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect(),
        _ => full_menu.to_vec(),
    };

    Ok(RestaurantShowTemplate {
        restaurant,
        menu,
        categories,
        active_category: params.category,
    })
}
