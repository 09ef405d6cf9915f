//! Local persistence for the food-share listings.
//!
//! The listing set is persisted as a single JSON snapshot file under the
//! configured data directory - a read-then-write contract with no
//! transactional guarantees, acceptable because the demo is single-user.
//! The cart is deliberately NOT persisted here; it lives in memory only and
//! does not survive a restart.

pub mod listings;

pub use listings::ListingStore;

use thiserror::Error;

/// Errors from the listing snapshot store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file could not be parsed or serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
