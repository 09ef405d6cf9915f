//! Domain types for the storefront.

pub mod listing;
pub mod order;
pub mod session;

pub use listing::{FoodListing, ListingDraft};
pub use order::{Order, OrderItem};
pub use session::CurrentUser;
pub use session::keys as session_keys;
