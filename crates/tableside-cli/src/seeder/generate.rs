//! Fake data generation, parallelised with Rayon.
//!
//! Usernames embed a per-run tag plus their position so repeated seed runs
//! never collide on the unique username columns.

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::FirstName;
use rayon::prelude::*;
use uuid::Uuid;

use super::models::{OwnerSeed, ProductSeed, RestaurantSeed, StaffSeed};

pub fn generate_owners(count: usize, run_tag: &str, password_hash: &str) -> Vec<OwnerSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            OwnerSeed {
                username: format!("{}.owner.{run_tag}.{idx}", first_name.to_lowercase()),
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

pub fn generate_restaurants(owner_ids: &[Uuid], per_owner: usize) -> Vec<RestaurantSeed> {
    owner_ids
        .par_iter()
        .flat_map(|&owner_id| {
            (0..per_owner)
                .map(|idx| {
                    let company: String = CompanyName().fake();
                    RestaurantSeed {
                        owner_id,
                        name: format!("{company} Kitchen #{}", idx + 1),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn generate_staff(
    restaurant_ids: &[Uuid],
    per_restaurant: usize,
    run_tag: &str,
    password_hash: &str,
) -> Vec<StaffSeed> {
    restaurant_ids
        .par_iter()
        .enumerate()
        .flat_map(|(restaurant_idx, &restaurant_id)| {
            (0..per_restaurant)
                .map(|idx| {
                    let first_name: String = FirstName().fake();
                    StaffSeed {
                        restaurant_id,
                        username: format!(
                            "{}.staff.{run_tag}.{restaurant_idx}.{idx}",
                            first_name.to_lowercase()
                        ),
                        password_hash: password_hash.to_string(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn generate_products(restaurant_ids: &[Uuid], per_restaurant: usize) -> Vec<ProductSeed> {
    restaurant_ids
        .par_iter()
        .flat_map(|&restaurant_id| {
            (0..per_restaurant)
                .map(|idx| {
                    let word: String = Word().fake();
                    let description: String = Sentence(4..10).fake();
                    let cents: u32 = (150u32..5000u32).fake();
                    ProductSeed {
                        restaurant_id,
                        title: format!("{} {}", capitalize(&word), idx + 1),
                        description,
                        unit_price: f64::from(cents) / 100.0,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_owner_usernames_are_unique() {
        let owners = generate_owners(50, "abc123", "hash");
        let names: HashSet<_> = owners.iter().map(|o| o.username.as_str()).collect();
        assert_eq!(names.len(), 50);
        assert!(owners.iter().all(|o| o.username.contains("abc123")));
    }

    #[test]
    fn test_restaurants_per_owner() {
        let owners = vec![Uuid::new_v4(), Uuid::new_v4()];
        let restaurants = generate_restaurants(&owners, 3);
        assert_eq!(restaurants.len(), 6);
        for owner in &owners {
            assert_eq!(restaurants.iter().filter(|r| r.owner_id == *owner).count(), 3);
        }
    }

    #[test]
    fn test_staff_usernames_are_unique_across_restaurants() {
        let restaurants: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let staff = generate_staff(&restaurants, 4, "run", "hash");
        let names: HashSet<_> = staff.iter().map(|s| s.username.as_str()).collect();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_products_have_valid_prices_and_unique_titles() {
        let restaurant = Uuid::new_v4();
        let products = generate_products(&[restaurant], 20);
        assert_eq!(products.len(), 20);
        assert!(products.iter().all(|p| p.unit_price >= 1.5 && p.unit_price < 50.0));
        let titles: HashSet<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles.len(), 20);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("miso"), "Miso");
        assert_eq!(capitalize(""), "");
    }
}
