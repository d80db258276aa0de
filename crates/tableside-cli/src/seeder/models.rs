//! Seed rows and seeding configuration.

use uuid::Uuid;

pub struct OwnerSeed {
    pub username: String,
    pub password_hash: String,
}

pub struct RestaurantSeed {
    pub owner_id: Uuid,
    pub name: String,
}

pub struct StaffSeed {
    pub restaurant_id: Uuid,
    pub username: String,
    pub password_hash: String,
}

pub struct ProductSeed {
    pub restaurant_id: Uuid,
    pub title: String,
    pub description: String,
    pub unit_price: f64,
}

/// How much fake data `seed_all` generates.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub owners: usize,
    pub restaurants_per_owner: usize,
    pub staff_per_restaurant: usize,
    pub products_per_restaurant: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            owners: 5,
            restaurants_per_owner: 2,
            staff_per_restaurant: 4,
            products_per_restaurant: 12,
        }
    }
}

impl SeedConfig {
    pub fn new(owners: usize) -> Self {
        Self {
            owners,
            ..Default::default()
        }
    }

    pub fn with_restaurants(mut self, per_owner: usize) -> Self {
        self.restaurants_per_owner = per_owner;
        self
    }

    pub fn with_staff(mut self, per_restaurant: usize) -> Self {
        self.staff_per_restaurant = per_restaurant;
        self
    }

    pub fn with_products(mut self, per_restaurant: usize) -> Self {
        self.products_per_restaurant = per_restaurant;
        self
    }

    pub fn total_restaurants(&self) -> usize {
        self.owners * self.restaurants_per_owner
    }

    pub fn total_staff(&self) -> usize {
        self.total_restaurants() * self.staff_per_restaurant
    }

    pub fn total_products(&self) -> usize {
        self.total_restaurants() * self.products_per_restaurant
    }
}
