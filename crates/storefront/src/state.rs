//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::CartService;
use crate::storage::{ListingStore, StorageError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the restaurant catalog, the cart
/// dispatcher, and the listing store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartService,
    listings: ListingStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Opens (or seeds) the listing snapshot under the configured data
    /// directory and loads the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing snapshot cannot be opened.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let listings = ListingStore::open(&config.listings_path())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                catalog: Catalog::seed(),
                carts: CartService::new(),
                listings,
                config,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the restaurant catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart dispatcher.
    #[must_use]
    pub fn carts(&self) -> &CartService {
        &self.inner.carts
    }

    /// Get a reference to the food listing store.
    #[must_use]
    pub fn listings(&self) -> &ListingStore {
        &self.inner.listings
    }
}
