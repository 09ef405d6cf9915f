//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog and listing
//! IDs are opaque strings (the seed data uses short numeric strings, user
//! generated records use UUIDs), so the wrappers hold a `String`.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use forkful_core::define_id;
/// define_id!(SomeId);
/// define_id!(OtherId);
///
/// let some_id = SomeId::new("1");
/// let other_id = OtherId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: SomeId = other_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(RestaurantId);
define_id!(MenuItemId);
define_id!(CartLineId);
define_id!(ListingId);
define_id!(OrderId);

impl CartLineId {
    /// Derive a line ID from the menu item and the moment the line was created.
    ///
    /// Line IDs are unique per line, not per menu item: removing a line and
    /// re-adding the same item later produces a fresh ID.
    #[must_use]
    pub fn derive(menu_item: &MenuItemId, issued_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}-{}",
            menu_item.as_str(),
            issued_at.timestamp_millis()
        ))
    }
}
