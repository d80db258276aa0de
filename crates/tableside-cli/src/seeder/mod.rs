//! Database seeding.
//!
//! - [`seed_demo`]: fixed demo data set
//! - [`seed_all`]: random owners, restaurants, staff and products
//! - [`clear_all`]: empties every table
//! - [`create_owner`]: a single owner account

mod demo;
mod generate;
mod insert;
mod models;

use std::time::Instant;

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use tableside_core::hash_password_blocking;
use tableside_models::auth::SignUpRequest;

pub use demo::{DEMO_OWNER, DEMO_PRODUCT, DEMO_RESTAURANT, DEMO_STAFF, DemoSummary, seed_demo};
pub use generate::{generate_owners, generate_products, generate_restaurants, generate_staff};
pub use models::{OwnerSeed, ProductSeed, RestaurantSeed, SeedConfig, StaffSeed};

/// Shared password for every generated account.
pub const SEED_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub owners: usize,
    pub restaurants: usize,
    pub staff: u64,
    pub products: u64,
}

/// Generates and inserts fake data in a single transaction.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...");
    println!(
        "   - {} owners, {} restaurants, {} staff, {} products",
        config.owners,
        config.total_restaurants(),
        config.total_staff(),
        config.total_products()
    );

    // Low cost: every seeded account shares this hash
    let password_hash = bcrypt::hash(SEED_PASSWORD, 4).context("failed to hash seed password")?;
    let run_tag = Uuid::new_v4().simple().to_string()[..6].to_string();

    let mut tx = db.begin().await?;

    let owners = generate_owners(config.owners, &run_tag, &password_hash);
    let owner_ids = insert::insert_owners(&mut tx, &owners).await?;
    println!("   ✓ {} owners", owner_ids.len());

    let restaurants = generate_restaurants(&owner_ids, config.restaurants_per_owner);
    let restaurant_ids = insert::insert_restaurants(&mut tx, &restaurants).await?;
    println!("   ✓ {} restaurants", restaurant_ids.len());

    let staff = generate_staff(
        &restaurant_ids,
        config.staff_per_restaurant,
        &run_tag,
        &password_hash,
    );
    let staff_count = insert::insert_staff(&mut tx, &staff).await?;
    println!("   ✓ {staff_count} staff");

    let products = generate_products(&restaurant_ids, config.products_per_restaurant);
    let product_count = insert::insert_products(&mut tx, &products).await?;
    println!("   ✓ {product_count} products");

    tx.commit().await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("📝 Password for all seeded accounts: {SEED_PASSWORD}");

    Ok(SeedSummary {
        owners: owner_ids.len(),
        restaurants: restaurant_ids.len(),
        staff: staff_count,
        products: product_count,
    })
}

/// Empties all six tables.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query("TRUNCATE order_items, orders, products, staff, restaurants, owners")
        .execute(db)
        .await?;
    Ok(())
}

/// Creates an owner account after applying the sign-up rules.
pub async fn create_owner(db: &PgPool, username: &str, password: &str) -> anyhow::Result<Uuid> {
    let request = SignUpRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid owner credentials: {e}"))?;

    let password_hash = hash_password_blocking(request.password).await?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO owners (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(&request.username)
    .bind(&password_hash)
    .fetch_one(db)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            anyhow::anyhow!("username '{}' is already taken", request.username)
        }
        _ => anyhow::Error::from(e),
    })?;

    Ok(id)
}
