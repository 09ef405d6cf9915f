//! In-process restaurant catalog.
//!
//! Restaurants and menus are immutable reference data compiled into the
//! binary, the demo equivalent of an upstream catalog service. The catalog
//! is loaded once into [`crate::state::AppState`] and only ever read.

use std::collections::HashMap;

use rust_decimal::Decimal;

use forkful_core::{MenuItem, MenuItemId, Price, Restaurant, RestaurantId};

/// The restaurant catalog: every restaurant plus its menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<RestaurantId, Vec<MenuItem>>,
}

impl Catalog {
    /// Build the built-in demo catalog.
    #[must_use]
    pub fn seed() -> Self {
        let restaurants = seed_restaurants();
        let menus = seed_menus();
        Self { restaurants, menus }
    }

    /// All restaurants, catalog order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants flagged as promoted.
    #[must_use]
    pub fn promoted(&self) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.promoted).collect()
    }

    /// Look up one restaurant by ID.
    #[must_use]
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// The menu for a restaurant. Unknown IDs read as an empty menu.
    #[must_use]
    pub fn menu(&self, id: &RestaurantId) -> &[MenuItem] {
        self.menus.get(id).map_or(&[], Vec::as_slice)
    }

    /// Look up one menu item within a restaurant's menu.
    #[must_use]
    pub fn menu_item(&self, restaurant: &RestaurantId, item: &MenuItemId) -> Option<&MenuItem> {
        self.menu(restaurant).iter().find(|m| &m.id == item)
    }

    /// Distinct menu categories for a restaurant, menu order.
    #[must_use]
    pub fn categories(&self, id: &RestaurantId) -> Vec<String> {
        let mut categories = Vec::new();
        for item in self.menu(id) {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Cuisine chips shown on the home screen.
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        let mut cuisines = Vec::new();
        for restaurant in &self.restaurants {
            for cuisine in &restaurant.cuisine {
                if !cuisines.contains(cuisine) {
                    cuisines.push(cuisine.clone());
                }
            }
        }
        cuisines
    }

    /// Restaurants matching a free-text query (name or cuisine) and an
    /// optional cuisine filter, both case-insensitive.
    #[must_use]
    pub fn search(&self, query: &str, cuisine: Option<&str>) -> Vec<&Restaurant> {
        let query = query.to_lowercase();
        self.restaurants
            .iter()
            .filter(|r| {
                query.is_empty()
                    || r.name.to_lowercase().contains(&query)
                    || r.cuisine.iter().any(|c| c.to_lowercase().contains(&query))
            })
            .filter(|r| {
                cuisine.is_none_or(|wanted| {
                    r.cuisine.iter().any(|c| c.eq_ignore_ascii_case(wanted))
                })
            })
            .collect()
    }
}

fn restaurant(
    id: &str,
    name: &str,
    image: &str,
    cuisine: &[&str],
    rating_tenths: i64,
    delivery_time: &str,
    fee_cents: i64,
    minimum_cents: i64,
    promoted: bool,
) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id),
        name: name.to_string(),
        image: image.to_string(),
        cuisine: cuisine.iter().map(ToString::to_string).collect(),
        rating: Decimal::new(rating_tenths, 1),
        delivery_time: delivery_time.to_string(),
        delivery_fee: Price::from_cents(fee_cents),
        minimum_order: Price::from_cents(minimum_cents),
        promoted,
    }
}

fn item(id: &str, name: &str, description: &str, cents: i64, category: &str, popular: bool) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: format!("https://images.example.com/menu/{id}.jpg"),
        category: category.to_string(),
        popular,
    }
}

fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "1",
            "Bella Italia",
            "https://images.example.com/restaurants/bella-italia.jpg",
            &["Italian", "Pizza"],
            47,
            "25-35 min",
            299,
            1500,
            true,
        ),
        restaurant(
            "2",
            "Sakura Sushi",
            "https://images.example.com/restaurants/sakura-sushi.jpg",
            &["Sushi", "Japanese"],
            48,
            "30-40 min",
            399,
            2000,
            false,
        ),
        restaurant(
            "3",
            "Burger Palace",
            "https://images.example.com/restaurants/burger-palace.jpg",
            &["Burgers", "American"],
            44,
            "20-30 min",
            199,
            1000,
            true,
        ),
        restaurant(
            "4",
            "Spice Garden",
            "https://images.example.com/restaurants/spice-garden.jpg",
            &["Indian", "Thai"],
            46,
            "35-45 min",
            249,
            1800,
            false,
        ),
    ]
}

fn seed_menus() -> HashMap<RestaurantId, Vec<MenuItem>> {
    let mut menus = HashMap::new();

    menus.insert(
        RestaurantId::new("1"),
        vec![
            item(
                "1-1",
                "Margherita Pizza",
                "San Marzano tomatoes, fresh mozzarella, basil",
                1299,
                "Pizza",
                true,
            ),
            item(
                "1-2",
                "Pepperoni Pizza",
                "Double pepperoni with a crispy thin crust",
                1499,
                "Pizza",
                false,
            ),
            item(
                "1-3",
                "Spaghetti Carbonara",
                "Guanciale, pecorino, egg yolk",
                1399,
                "Pasta",
                true,
            ),
            item(
                "1-4",
                "Tiramisu",
                "Espresso-soaked ladyfingers, mascarpone",
                699,
                "Desserts",
                false,
            ),
        ],
    );

    menus.insert(
        RestaurantId::new("2"),
        vec![
            item(
                "2-1",
                "Salmon Nigiri Set",
                "Eight pieces of fresh salmon nigiri",
                1599,
                "Nigiri",
                true,
            ),
            item(
                "2-2",
                "California Roll",
                "Crab, avocado, cucumber",
                899,
                "Rolls",
                false,
            ),
            item(
                "2-3",
                "Miso Soup",
                "Tofu, wakame, scallions",
                399,
                "Sides",
                false,
            ),
        ],
    );

    menus.insert(
        RestaurantId::new("3"),
        vec![
            item(
                "3-1",
                "Classic Burger",
                "Beef patty, lettuce, tomato, house sauce",
                999,
                "Burgers",
                true,
            ),
            item(
                "3-2",
                "Double Cheese Burger",
                "Two patties, double cheddar",
                1349,
                "Burgers",
                true,
            ),
            item("3-3", "Sweet Potato Fries", "With garlic aioli", 499, "Sides", false),
            item("3-4", "Vanilla Shake", "Hand-spun with real vanilla", 549, "Drinks", false),
        ],
    );

    menus.insert(
        RestaurantId::new("4"),
        vec![
            item(
                "4-1",
                "Chicken Tikka Masala",
                "Creamy tomato curry, basmati rice",
                1449,
                "Curries",
                true,
            ),
            item(
                "4-2",
                "Pad Thai",
                "Rice noodles, tamarind, peanuts",
                1249,
                "Noodles",
                false,
            ),
            item("4-3", "Garlic Naan", "Baked to order", 349, "Sides", false),
        ],
    );

    menus
}
