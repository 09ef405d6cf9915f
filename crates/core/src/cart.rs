//! The cart state machine.
//!
//! A [`Cart`] is mutated exclusively through the closed [`CartAction`] set,
//! applied by the pure transition function [`Cart::apply`]. The function
//! never fails: unknown line IDs and out-of-range quantities are absorbed as
//! no-ops so the UI stays resilient to stale references. Aggregates
//! (`total_amount`, `item_count`) are maintained incrementally by delta,
//! never recomputed from the lines.
//!
//! Two macro-states exist: **Empty** (no restaurant, no lines) and **Active**
//! (one restaurant, at least one line). Adding an item from a different
//! restaurant than the cart's current one silently replaces the whole cart -
//! a documented policy, not an accident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CartLineId, MenuItemId, Price, RestaurantId};

/// A menu item offered by a restaurant. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Non-negative decimal price.
    pub price: Price,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
}

/// A restaurant from the catalog. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image: String,
    pub cuisine: Vec<String>,
    pub rating: rust_decimal::Decimal,
    /// Display string, e.g. "25-35 min".
    pub delivery_time: String,
    pub delivery_fee: Price,
    pub minimum_order: Price,
    #[serde(default)]
    pub promoted: bool,
}

/// One distinct menu item entry within the cart, with its own quantity.
///
/// Owned exclusively by the cart: created on first add of a menu item,
/// destroyed when its quantity reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unique per line, derived from the item ID and creation timestamp.
    pub id: CartLineId,
    pub menu_item: MenuItem,
    /// Always >= 1; a zero quantity means removal, never a persisted line.
    pub quantity: u32,
    /// `quantity * menu_item.price`, maintained incrementally.
    pub total_price: Price,
}

impl CartLine {
    fn new(menu_item: MenuItem, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: CartLineId::derive(&menu_item.id, issued_at),
            total_price: menu_item.price,
            menu_item,
            quantity: 1,
        }
    }
}

/// A named, structured intent to transition cart state.
///
/// The four operations of the cart contract. All are synchronous, perform no
/// I/O, and have no failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartAction {
    /// Add one unit of `menu_item` from `restaurant`.
    AddItem {
        menu_item: MenuItem,
        restaurant: Restaurant,
    },
    /// Remove the line with `line_id`. Unknown IDs are a no-op.
    RemoveItem { line_id: CartLineId },
    /// Set the quantity of the line with `line_id`.
    ///
    /// The payload is `i64` (the quantity type used on the wire by forms);
    /// negative values are absorbed as no-ops, zero removes the line.
    UpdateQuantity { line_id: CartLineId, quantity: i64 },
    /// Reset to the empty cart.
    Clear,
}

/// The mutable aggregate of selected items awaiting checkout.
///
/// Lines keep insertion order. At most one restaurant is associated with a
/// non-empty cart; the empty cart has no restaurant and zero totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub restaurant: Option<Restaurant>,
    pub total_amount: Price,
    pub item_count: u32,
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cart {
    /// The empty cart: no lines, no restaurant, zero totals.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            restaurant: None,
            total_amount: Price::zero(),
            item_count: 0,
        }
    }

    /// Whether the cart is in the Empty macro-state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by ID.
    #[must_use]
    pub fn line(&self, line_id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == line_id)
    }

    /// Apply an action, producing the next cart state.
    ///
    /// Pure: the caller supplies `issued_at` (used only to derive new line
    /// IDs) so that transitions stay deterministic under test.
    #[must_use]
    pub fn apply(&self, action: CartAction, issued_at: DateTime<Utc>) -> Self {
        match action {
            CartAction::AddItem {
                menu_item,
                restaurant,
            } => self.add_item(menu_item, restaurant, issued_at),
            CartAction::RemoveItem { line_id } => self.remove_item(&line_id),
            CartAction::UpdateQuantity { line_id, quantity } => {
                self.update_quantity(&line_id, quantity)
            }
            CartAction::Clear => Self::empty(),
        }
    }

    fn add_item(
        &self,
        menu_item: MenuItem,
        restaurant: Restaurant,
        issued_at: DateTime<Utc>,
    ) -> Self {
        // Adding from a different restaurant replaces the entire cart,
        // silently - no confirmation step.
        if self
            .restaurant
            .as_ref()
            .is_some_and(|current| current.id != restaurant.id)
        {
            let line = CartLine::new(menu_item, issued_at);
            return Self {
                total_amount: line.total_price,
                item_count: 1,
                lines: vec![line],
                restaurant: Some(restaurant),
            };
        }

        let unit_price = menu_item.price;

        // Same item already in the cart: bump its quantity by one.
        if let Some(pos) = self
            .lines
            .iter()
            .position(|line| line.menu_item.id == menu_item.id)
        {
            let mut lines = self.lines.clone();
            if let Some(line) = lines.get_mut(pos) {
                line.quantity += 1;
                line.total_price = line.total_price + unit_price;
            }
            return Self {
                lines,
                restaurant: self.restaurant.clone(),
                total_amount: self.total_amount + unit_price,
                item_count: self.item_count + 1,
            };
        }

        // New line, appended in insertion order; adopt the restaurant if the
        // cart had none yet.
        let mut lines = self.lines.clone();
        lines.push(CartLine::new(menu_item, issued_at));
        Self {
            lines,
            restaurant: Some(self.restaurant.clone().unwrap_or(restaurant)),
            total_amount: self.total_amount + unit_price,
            item_count: self.item_count + 1,
        }
    }

    fn remove_item(&self, line_id: &CartLineId) -> Self {
        let Some(removed) = self.line(line_id) else {
            // Stale reference: no error signaled, state unchanged.
            return self.clone();
        };

        let lines: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|line| &line.id != line_id)
            .cloned()
            .collect();

        if lines.is_empty() {
            return Self::empty();
        }

        Self {
            total_amount: self.total_amount - removed.total_price,
            item_count: self.item_count - removed.quantity,
            restaurant: self.restaurant.clone(),
            lines,
        }
    }

    fn update_quantity(&self, line_id: &CartLineId, quantity: i64) -> Self {
        // Negative (or absurdly large) input is absorbed, not an error.
        let Ok(quantity) = u32::try_from(quantity) else {
            return self.clone();
        };

        if quantity == 0 {
            return self.remove_item(line_id);
        }

        let Some(pos) = self.lines.iter().position(|line| &line.id == line_id) else {
            return self.clone();
        };

        let mut lines = self.lines.clone();
        let Some(line) = lines.get_mut(pos) else {
            return self.clone();
        };

        let old_quantity = line.quantity;
        let old_total = line.total_price;
        let new_total = line.menu_item.price * quantity;
        line.quantity = quantity;
        line.total_price = new_total;

        // Aggregates move by the delta, preserving the running-total
        // invariant without a full recompute.
        Self {
            lines,
            restaurant: self.restaurant.clone(),
            total_amount: self.total_amount - old_total + new_total,
            item_count: self.item_count - old_quantity + quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::Rng;
    use rust_decimal::Decimal;

    use super::*;

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn restaurant_a() -> Restaurant {
        Restaurant {
            id: RestaurantId::new("rest-a"),
            name: "Bella Italia".to_string(),
            image: String::new(),
            cuisine: vec!["Italian".to_string(), "Pizza".to_string()],
            rating: Decimal::new(47, 1),
            delivery_time: "25-35 min".to_string(),
            delivery_fee: Price::from_cents(299),
            minimum_order: Price::from_cents(1500),
            promoted: true,
        }
    }

    fn restaurant_b() -> Restaurant {
        Restaurant {
            id: RestaurantId::new("rest-b"),
            name: "Burger Palace".to_string(),
            image: String::new(),
            cuisine: vec!["Burgers".to_string()],
            rating: Decimal::new(45, 1),
            delivery_time: "20-30 min".to_string(),
            delivery_fee: Price::from_cents(199),
            minimum_order: Price::from_cents(1000),
            promoted: false,
        }
    }

    fn menu_item(id: &str, name: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Price::from_cents(cents),
            image: String::new(),
            category: "Mains".to_string(),
            popular: false,
        }
    }

    fn pizza() -> MenuItem {
        menu_item("pizza", "Margherita Pizza", 1000)
    }

    fn burger() -> MenuItem {
        menu_item("burger", "Classic Burger", 500)
    }

    /// Apply with a ticking clock so derived line IDs never collide.
    struct Clock(i64);

    impl Clock {
        fn new() -> Self {
            Self(1_700_000_000_000)
        }

        fn apply(&mut self, cart: &Cart, action: CartAction) -> Cart {
            self.0 += 1;
            cart.apply(action, DateTime::from_timestamp_millis(self.0).unwrap())
        }
    }

    fn assert_invariants(cart: &Cart) {
        let line_total: Decimal = cart.lines.iter().map(|l| l.total_price.amount).sum();
        assert_eq!(cart.total_amount.amount, line_total, "total_amount drifted");

        let quantity_total: u32 = cart.lines.iter().map(|l| l.quantity).sum();
        assert_eq!(cart.item_count, quantity_total, "item_count drifted");

        for line in &cart.lines {
            assert!(line.quantity >= 1, "zero-quantity line persisted");
            assert_eq!(
                line.total_price,
                line.menu_item.price * line.quantity,
                "line total out of sync"
            );
        }

        if cart.lines.is_empty() {
            assert!(cart.restaurant.is_none());
            assert!(cart.total_amount.is_zero());
            assert_eq!(cart.item_count, 0);
        } else {
            assert!(cart.restaurant.is_some());
        }
    }

    // =========================================================================
    // AddItem
    // =========================================================================

    #[test]
    fn test_add_item_to_empty_cart() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_amount, Price::from_cents(1000));
        assert_eq!(
            cart.restaurant.as_ref().map(|r| r.id.as_str()),
            Some("rest-a")
        );
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_same_item_increments_existing_line() {
        let mut clock = Clock::new();
        let add = CartAction::AddItem {
            menu_item: pizza(),
            restaurant: restaurant_a(),
        };
        let cart = clock.apply(&Cart::empty(), add.clone());
        let cart = clock.apply(&cart, add);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines.first().unwrap().quantity, 2);
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total_amount, Price::from_cents(2000));
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_accumulates_count_and_total() {
        // For any AddItem sequence from one restaurant, item_count equals the
        // number of calls and total_amount the sum of added prices.
        let mut clock = Clock::new();
        let items = [pizza(), burger(), pizza(), burger(), burger()];
        let mut cart = Cart::empty();
        let mut expected_total = Price::zero();

        for item in items {
            expected_total += item.price;
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: item,
                    restaurant: restaurant_a(),
                },
            );
            assert_invariants(&cart);
        }

        assert_eq!(cart.item_count, 5);
        assert_eq!(cart.total_amount, expected_total);
        assert_eq!(cart.lines.len(), 2);
    }

    #[test]
    fn test_add_from_different_restaurant_replaces_cart() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for _ in 0..3 {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: pizza(),
                    restaurant: restaurant_a(),
                },
            );
        }

        let cart = clock.apply(
            &cart,
            CartAction::AddItem {
                menu_item: burger(),
                restaurant: restaurant_b(),
            },
        );

        // Exactly one line at quantity 1, regardless of prior state.
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_amount, Price::from_cents(500));
        assert_eq!(
            cart.restaurant.as_ref().map(|r| r.id.as_str()),
            Some("rest-b")
        );
        assert_invariants(&cart);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for item in [pizza(), burger(), menu_item("salad", "Caesar Salad", 750)] {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: item,
                    restaurant: restaurant_a(),
                },
            );
        }

        let names: Vec<&str> = cart
            .lines
            .iter()
            .map(|l| l.menu_item.name.as_str())
            .collect();
        assert_eq!(names, ["Margherita Pizza", "Classic Burger", "Caesar Salad"]);
    }

    // =========================================================================
    // RemoveItem
    // =========================================================================

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );

        let next = clock.apply(
            &cart,
            CartAction::RemoveItem {
                line_id: CartLineId::new("no-such-line"),
            },
        );
        assert_eq!(next, cart);
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let mut clock = Clock::new();
        let next = clock.apply(
            &Cart::empty(),
            CartAction::RemoveItem {
                line_id: CartLineId::new("anything"),
            },
        );
        assert_eq!(next, Cart::empty());
    }

    #[test]
    fn test_remove_last_line_clears_restaurant() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );
        let line_id = cart.lines.first().unwrap().id.clone();

        let cart = clock.apply(&cart, CartAction::RemoveItem { line_id });
        assert_eq!(cart, Cart::empty());
    }

    #[test]
    fn test_remove_one_of_two_lines_keeps_restaurant() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for item in [pizza(), burger()] {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: item,
                    restaurant: restaurant_a(),
                },
            );
        }
        let first_line = cart.lines.first().unwrap().id.clone();

        let cart = clock.apply(
            &cart,
            CartAction::RemoveItem {
                line_id: first_line,
            },
        );
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.total_amount, Price::from_cents(500));
        assert!(cart.restaurant.is_some());
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_then_readd_roundtrips_aggregates() {
        let mut clock = Clock::new();
        let add = CartAction::AddItem {
            menu_item: pizza(),
            restaurant: restaurant_a(),
        };
        let original = clock.apply(&Cart::empty(), add.clone());

        let line_id = original.lines.first().unwrap().id.clone();
        let removed = clock.apply(&original, CartAction::RemoveItem { line_id });
        let readded = clock.apply(&removed, add);

        // Line IDs differ (fresh timestamp) but the aggregates round-trip.
        assert_eq!(readded.item_count, original.item_count);
        assert_eq!(readded.total_amount, original.total_amount);
        assert_eq!(readded.lines.len(), original.lines.len());
    }

    // =========================================================================
    // UpdateQuantity
    // =========================================================================

    #[test]
    fn test_update_quantity_adjusts_by_delta() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: burger(),
                restaurant: restaurant_b(),
            },
        );
        let line_id = cart.lines.first().unwrap().id.clone();

        let cart = clock.apply(
            &cart,
            CartAction::UpdateQuantity {
                line_id,
                quantity: 3,
            },
        );
        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.total_amount, Price::from_cents(1500));
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_down() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for _ in 0..4 {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: pizza(),
                    restaurant: restaurant_a(),
                },
            );
        }
        let line_id = cart.lines.first().unwrap().id.clone();

        let cart = clock.apply(
            &cart,
            CartAction::UpdateQuantity {
                line_id,
                quantity: 2,
            },
        );
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total_amount, Price::from_cents(2000));
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for item in [pizza(), burger()] {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: item,
                    restaurant: restaurant_a(),
                },
            );
        }

        for line in &cart.lines {
            let via_update = cart.apply(
                CartAction::UpdateQuantity {
                    line_id: line.id.clone(),
                    quantity: 0,
                },
                DateTime::from_timestamp_millis(0).unwrap(),
            );
            let via_remove = cart.apply(
                CartAction::RemoveItem {
                    line_id: line.id.clone(),
                },
                DateTime::from_timestamp_millis(0).unwrap(),
            );
            assert_eq!(via_update, via_remove);
        }
    }

    #[test]
    fn test_update_quantity_negative_is_noop() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );
        let line_id = cart.lines.first().unwrap().id.clone();

        let next = clock.apply(
            &cart,
            CartAction::UpdateQuantity {
                line_id,
                quantity: -1,
            },
        );
        assert_eq!(next, cart);
    }

    #[test]
    fn test_update_quantity_unknown_line_is_noop() {
        let mut clock = Clock::new();
        let cart = clock.apply(
            &Cart::empty(),
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );

        let next = clock.apply(
            &cart,
            CartAction::UpdateQuantity {
                line_id: CartLineId::new("no-such-line"),
                quantity: 5,
            },
        );
        assert_eq!(next, cart);
    }

    // =========================================================================
    // Clear
    // =========================================================================

    #[test]
    fn test_clear_always_yields_empty_cart() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();
        for item in [pizza(), burger(), pizza()] {
            cart = clock.apply(
                &cart,
                CartAction::AddItem {
                    menu_item: item,
                    restaurant: restaurant_a(),
                },
            );
        }

        let cart = clock.apply(&cart, CartAction::Clear);
        assert_eq!(cart, Cart::empty());

        // Clearing the empty cart is also the empty cart.
        let cart = clock.apply(&cart, CartAction::Clear);
        assert_eq!(cart, Cart::empty());
    }

    // =========================================================================
    // End-to-end scenario
    // =========================================================================

    #[test]
    fn test_full_ordering_scenario() {
        let mut clock = Clock::new();
        let mut cart = Cart::empty();

        // AddItem(Pizza $10, RestaurantA) -> 1 line, qty 1, total 10
        cart = clock.apply(
            &cart,
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );
        assert_eq!((cart.lines.len(), cart.item_count), (1, 1));
        assert_eq!(cart.total_amount, Price::from_cents(1000));

        // AddItem(Pizza, RestaurantA) again -> 1 line, qty 2, total 20
        cart = clock.apply(
            &cart,
            CartAction::AddItem {
                menu_item: pizza(),
                restaurant: restaurant_a(),
            },
        );
        assert_eq!((cart.lines.len(), cart.item_count), (1, 2));
        assert_eq!(cart.total_amount, Price::from_cents(2000));

        // AddItem(Burger $5, RestaurantB) -> 1 line (Burger), qty 1, total 5
        cart = clock.apply(
            &cart,
            CartAction::AddItem {
                menu_item: burger(),
                restaurant: restaurant_b(),
            },
        );
        assert_eq!((cart.lines.len(), cart.item_count), (1, 1));
        assert_eq!(cart.total_amount, Price::from_cents(500));
        assert_eq!(
            cart.restaurant.as_ref().map(|r| r.id.as_str()),
            Some("rest-b")
        );

        // UpdateQuantity(burgerLine, 3) -> total 15, item_count 3
        let burger_line = cart.lines.first().unwrap().id.clone();
        cart = clock.apply(
            &cart,
            CartAction::UpdateQuantity {
                line_id: burger_line.clone(),
                quantity: 3,
            },
        );
        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.total_amount, Price::from_cents(1500));

        // RemoveItem(burgerLine) -> empty cart
        cart = clock.apply(
            &cart,
            CartAction::RemoveItem {
                line_id: burger_line,
            },
        );
        assert_eq!(cart, Cart::empty());
    }

    // =========================================================================
    // Randomized invariant check
    // =========================================================================

    #[test]
    fn test_invariants_hold_under_random_action_sequences() {
        let mut rng = rand::rng();
        let mut clock = Clock::new();
        let items = [
            pizza(),
            burger(),
            menu_item("salad", "Caesar Salad", 750),
            menu_item("wrap", "Falafel Wrap", 625),
        ];
        let restaurants = [restaurant_a(), restaurant_b()];

        let mut cart = Cart::empty();
        for _ in 0..1000 {
            let action = match rng.random_range(0..10) {
                0..=4 => CartAction::AddItem {
                    menu_item: items[rng.random_range(0..items.len())].clone(),
                    restaurant: restaurants[rng.random_range(0..restaurants.len())].clone(),
                },
                5..=6 => {
                    let line_id = cart.lines.first().map_or_else(
                        || CartLineId::new("bogus"),
                        |l| l.id.clone(),
                    );
                    CartAction::RemoveItem { line_id }
                }
                7..=8 => {
                    let line_id = if cart.lines.is_empty() || rng.random_bool(0.2) {
                        CartLineId::new("bogus")
                    } else {
                        cart.lines[rng.random_range(0..cart.lines.len())].id.clone()
                    };
                    CartAction::UpdateQuantity {
                        line_id,
                        quantity: rng.random_range(-2..8),
                    }
                }
                _ => CartAction::Clear,
            };

            cart = clock.apply(&cart, action);
            assert_invariants(&cart);
        }
    }
}
