//! Food-share listing domain types.
//!
//! Listings are the donation-side records: surplus food offered for pickup.
//! They are a plain CRUD entity, entirely separate from the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forkful_core::ListingId;

/// A food donation listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodListing {
    pub id: ListingId,
    pub name: String,
    pub description: String,
    /// Free-text quantity, e.g. "20 loaves" or "5 kg".
    pub quantity: String,
    pub location: String,
    /// Free-text pickup window, e.g. "Today, 2 PM".
    pub availability: String,
    /// Donating organization or person.
    pub donor: String,
    pub contact_person: String,
    pub phone: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FoodListing {
    /// Case-insensitive match on name, donor, or location.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.donor.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
    }
}

/// Form payload for creating or editing a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: String,
    pub location: String,
    pub availability: String,
    pub donor: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ListingDraft {
    /// Materialize the draft into a listing.
    #[must_use]
    pub fn into_listing(self, id: ListingId, created_at: DateTime<Utc>) -> FoodListing {
        FoodListing {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            location: self.location,
            availability: self.availability,
            donor: self.donor,
            contact_person: self.contact_person,
            phone: self.phone,
            image: self.image.filter(|url| !url.is_empty()),
            created_at,
        }
    }

    /// Fill in blank donor fields from the signed-in user.
    #[must_use]
    pub fn with_default_donor(mut self, user: &crate::models::CurrentUser) -> Self {
        if self.donor.trim().is_empty() {
            self.donor = user.name.clone();
        }
        if self.contact_person.trim().is_empty() {
            self.contact_person = user.name.clone();
        }
        self
    }

    /// Apply the draft on top of an existing listing, keeping its identity.
    pub fn apply_to(self, listing: &mut FoodListing) {
        let id = listing.id.clone();
        let created_at = listing.created_at;
        *listing = self.into_listing(id, created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ListingDraft {
        ListingDraft {
            name: "Fresh Vegetables".to_string(),
            description: "Assorted produce".to_string(),
            quantity: "10 kg".to_string(),
            location: "Downtown".to_string(),
            availability: "Today, 2 PM".to_string(),
            donor: "City Bakery".to_string(),
            contact_person: "Sam".to_string(),
            phone: "555-0100".to_string(),
            image: Some(String::new()),
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let listing = draft().into_listing(ListingId::new("1"), Utc::now());
        assert!(listing.matches("fresh"));
        assert!(listing.matches("BAKERY"));
        assert!(listing.matches("downtown"));
        assert!(!listing.matches("sushi"));
    }

    #[test]
    fn test_empty_image_becomes_none() {
        let listing = draft().into_listing(ListingId::new("1"), Utc::now());
        assert!(listing.image.is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_blank_donor_defaults_to_user() {
        let user = crate::models::CurrentUser {
            id: forkful_core::UserId::new("u-1"),
            email: forkful_core::Email::parse("alex@example.com").unwrap(),
            name: "alex".to_string(),
        };

        let mut blank = draft();
        blank.donor = "  ".to_string();
        blank.contact_person = String::new();
        let filled = blank.with_default_donor(&user);

        assert_eq!(filled.donor, "alex");
        assert_eq!(filled.contact_person, "alex");

        // A provided donor is left alone.
        let kept = draft().with_default_donor(&user);
        assert_eq!(kept.donor, "City Bakery");
    }

    #[test]
    fn test_apply_to_preserves_identity() {
        let created = Utc::now();
        let mut listing = draft().into_listing(ListingId::new("keep-me"), created);

        let mut update = draft();
        update.name = "Bread & Pastries".to_string();
        update.apply_to(&mut listing);

        assert_eq!(listing.id.as_str(), "keep-me");
        assert_eq!(listing.created_at, created);
        assert_eq!(listing.name, "Bread & Pastries");
    }
}
