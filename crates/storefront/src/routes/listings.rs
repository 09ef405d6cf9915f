//! Food listing handlers.
//!
//! Listings are community food-share posts backed by the JSON snapshot in
//! [`crate::storage::ListingStore`]. Mutations answer with an HTMX
//! `listing-updated` trigger so any listing fragment on the page refreshes,
//! mirroring the cart's `cart-updated` convention.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Form,
};
use forkful_core::ListingId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{FoodListing, ListingDraft};
use crate::state::AppState;

/// Listing directory query parameters.
#[derive(Debug, Deserialize, Default)]
pub struct ListingQuery {
    /// Free-text search over name, donor, and location.
    pub q: Option<String>,
}

/// Listing directory template.
#[derive(Template, WebTemplate)]
#[template(path = "listings/index.html")]
pub struct ListingIndexTemplate {
    pub listings: Vec<FoodListing>,
    pub query: String,
}

/// Listing detail template.
#[derive(Template, WebTemplate)]
#[template(path = "listings/show.html")]
pub struct ListingShowTemplate {
    pub listing: FoodListing,
}

/// Listing create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "listings/form.html")]
pub struct ListingFormTemplate {
    pub listing: Option<FoodListing>,
}

/// Display the listing directory.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let listings = if query.trim().is_empty() {
        state.listings().all().await
    } else {
        state.listings().search(&query).await
    };

    ListingIndexTemplate { listings, query }
}

/// Display one listing.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ListingShowTemplate, AppError> {
    let id = ListingId::from(id);
    let listing = state
        .listings()
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("listing {id}")))?;

    Ok(ListingShowTemplate { listing })
}

/// Display the new-listing form.
#[instrument(skip(_user))]
pub async fn new(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    ListingFormTemplate { listing: None }
}

/// Create a listing and redirect to it.
#[instrument(skip(state, user, draft))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(draft): Form<ListingDraft>,
) -> Result<Response, AppError> {
    let draft = draft.with_default_donor(&user);
    let listing = state.listings().create(draft).await?;

    tracing::info!(listing_id = %listing.id, "created food listing");
    Ok((
        AppendHeaders([("HX-Trigger", "listing-updated")]),
        Redirect::to(&format!("/listings/{}", listing.id)),
    )
        .into_response())
}

/// Display the edit form for a listing.
#[instrument(skip(state, _user))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<ListingFormTemplate, AppError> {
    let id = ListingId::from(id);
    let listing = state
        .listings()
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("listing {id}")))?;

    Ok(ListingFormTemplate {
        listing: Some(listing),
    })
}

/// Update a listing and redirect to it.
#[instrument(skip(state, _user, draft))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Form(draft): Form<ListingDraft>,
) -> Result<Response, AppError> {
    let id = ListingId::from(id);
    let listing = state
        .listings()
        .update(&id, draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("listing {id}")))?;

    tracing::info!(listing_id = %listing.id, "updated food listing");
    Ok((
        AppendHeaders([("HX-Trigger", "listing-updated")]),
        Redirect::to(&format!("/listings/{}", listing.id)),
    )
        .into_response())
}

/// Delete a listing and return to the directory.
#[instrument(skip(state, _user))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = ListingId::from(id);
    if !state.listings().delete(&id).await? {
        return Err(AppError::NotFound(format!("listing {id}")));
    }

    tracing::info!(listing_id = %id, "deleted food listing");
    Ok((
        AppendHeaders([("HX-Trigger", "listing-updated")]),
        Redirect::to("/listings"),
    )
        .into_response())
}
