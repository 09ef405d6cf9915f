//! Forkful Core - Shared types and cart state machine.
//!
//! This crate provides the types used across all Forkful components:
//! - `storefront` - Server-rendered food delivery and food-share site
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no persistence. This keeps it lightweight and allows it to be used
//! anywhere, including in tests that need isolated cart instances.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`cart`] - The cart state machine: a closed action set applied by a
//!   pure transition function

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
