//! JSON snapshot store for food-share listings.
//!
//! The whole listing set is kept in memory behind a lock and flushed to one
//! JSON file after every mutation. Reads never touch the disk after startup.
//! Concurrent writers serialize on the lock; the file itself is written
//! whole, last-writer-wins.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use forkful_core::ListingId;

use super::StorageError;
use crate::models::{FoodListing, ListingDraft};

/// Store for [`FoodListing`] records, persisted as a single JSON snapshot.
#[derive(Debug)]
pub struct ListingStore {
    path: PathBuf,
    listings: RwLock<Vec<FoodListing>>,
}

impl ListingStore {
    /// Open the store at `path`, seeding demo listings if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing snapshot cannot be read or
    /// parsed, or if the parent directory cannot be created.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let listings = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            seed_listings()
        };

        let store = Self {
            path: path.to_path_buf(),
            listings: RwLock::new(listings),
        };
        Ok(store)
    }

    /// All listings, newest first.
    pub async fn all(&self) -> Vec<FoodListing> {
        let mut listings = self.listings.read().await.clone();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings
    }

    /// Look up one listing by ID.
    pub async fn get(&self, id: &ListingId) -> Option<FoodListing> {
        self.listings
            .read()
            .await
            .iter()
            .find(|listing| &listing.id == id)
            .cloned()
    }

    /// Listings matching `query` (name, donor, or location), newest first.
    pub async fn search(&self, query: &str) -> Vec<FoodListing> {
        let mut matches: Vec<FoodListing> = self
            .listings
            .read()
            .await
            .iter()
            .filter(|listing| listing.matches(query))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matches
    }

    /// Create a listing from a draft and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    pub async fn create(&self, draft: ListingDraft) -> Result<FoodListing, StorageError> {
        let listing = draft.into_listing(Self::mint_id(), Utc::now());

        let mut listings = self.listings.write().await;
        listings.push(listing.clone());
        self.persist(&listings)?;
        Ok(listing)
    }

    /// Update the listing with `id` from a draft, preserving its identity.
    ///
    /// Returns the updated listing, or `None` if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    pub async fn update(
        &self,
        id: &ListingId,
        draft: ListingDraft,
    ) -> Result<Option<FoodListing>, StorageError> {
        let mut listings = self.listings.write().await;
        let Some(listing) = listings.iter_mut().find(|listing| &listing.id == id) else {
            return Ok(None);
        };

        draft.apply_to(listing);
        let updated = listing.clone();
        self.persist(&listings)?;
        Ok(Some(updated))
    }

    /// Delete the listing with `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    pub async fn delete(&self, id: &ListingId) -> Result<bool, StorageError> {
        let mut listings = self.listings.write().await;
        let before = listings.len();
        listings.retain(|listing| &listing.id != id);

        if listings.len() == before {
            return Ok(false);
        }
        self.persist(&listings)?;
        Ok(true)
    }

    /// Number of stored listings.
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    /// Whether the store holds no listings.
    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }

    fn mint_id() -> ListingId {
        ListingId::new(Uuid::new_v4().to_string())
    }

    fn persist(&self, listings: &[FoodListing]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(listings)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Demo listings shown on first run, before any user data exists.
fn seed_listings() -> Vec<FoodListing> {
    fn seed(
        id: &str,
        name: &str,
        donor: &str,
        location: &str,
        availability: &str,
        image: &str,
        created_at: DateTime<Utc>,
    ) -> FoodListing {
        FoodListing {
            id: ListingId::new(id),
            name: name.to_string(),
            description: String::new(),
            quantity: "Several portions".to_string(),
            location: location.to_string(),
            availability: availability.to_string(),
            donor: donor.to_string(),
            contact_person: String::new(),
            phone: String::new(),
            image: Some(image.to_string()),
            created_at,
        }
    }

    let now = Utc::now();
    vec![
        seed(
            "seed-1",
            "Fresh Vegetables",
            "City Bakery",
            "Downtown",
            "Today, 2 PM",
            "https://images.unsplash.com/photo-1618160702438-9b02ab6515c9?w=400&h=300&fit=crop",
            now,
        ),
        seed(
            "seed-2",
            "Bread & Pastries",
            "Corner Cafe",
            "Main Street",
            "Tomorrow, 10 AM",
            "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?w=400&h=300&fit=crop",
            now - chrono::Duration::hours(1),
        ),
        seed(
            "seed-3",
            "Cooked Meals",
            "Restaurant Plaza",
            "Food Court",
            "Today, 6 PM",
            "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=400&h=300&fit=crop",
            now - chrono::Duration::hours(2),
        ),
    ]
}
