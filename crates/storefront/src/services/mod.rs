//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - The cart action dispatcher over server-held cart state

pub mod cart;

pub use cart::CartService;
