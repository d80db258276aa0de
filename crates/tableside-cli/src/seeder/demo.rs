//! The fixed demo data set: one owner with one restaurant, one staff member
//! and one product.

use sqlx::PgPool;
use uuid::Uuid;

use tableside_core::hash_password_blocking;

pub const DEMO_OWNER: (&str, &str) = ("Senku", "strongpassword");
pub const DEMO_STAFF: (&str, &str) = ("Taiju", "1234");
pub const DEMO_RESTAURANT: &str = "Sushi Den";
pub const DEMO_PRODUCT: (&str, &str, f64) = ("Wagyu Beef", "Tender wagyu beef", 24.9);

#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub staff_id: Uuid,
    pub product_id: Uuid,
}

/// Inserts the demo data set unless any owner already exists.
///
/// Returns `None` when skipped.
pub async fn seed_demo(db: &PgPool) -> anyhow::Result<Option<DemoSummary>> {
    let has_owners = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM owners)")
        .fetch_one(db)
        .await?;
    if has_owners {
        return Ok(None);
    }

    let owner_hash = hash_password_blocking(DEMO_OWNER.1.to_string()).await?;
    let staff_hash = hash_password_blocking(DEMO_STAFF.1.to_string()).await?;

    let mut tx = db.begin().await?;

    let owner_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO owners (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(DEMO_OWNER.0)
    .bind(&owner_hash)
    .fetch_one(&mut *tx)
    .await?;

    let restaurant_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO restaurants (owner_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(owner_id)
    .bind(DEMO_RESTAURANT)
    .fetch_one(&mut *tx)
    .await?;

    let staff_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO staff (restaurant_id, username, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(DEMO_STAFF.0)
    .bind(&staff_hash)
    .fetch_one(&mut *tx)
    .await?;

    let product_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO products (restaurant_id, title, description, unit_price)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(DEMO_PRODUCT.0)
    .bind(DEMO_PRODUCT.1)
    .bind(DEMO_PRODUCT.2)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(DemoSummary {
        owner_id,
        restaurant_id,
        staff_id,
        product_id,
    }))
}
