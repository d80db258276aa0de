//! Multi-row inserts inside the caller's transaction.

use sqlx::{Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use super::models::{OwnerSeed, ProductSeed, RestaurantSeed, StaffSeed};

// Stays well under the 65535 bind parameter limit for every table here
const BATCH_SIZE: usize = 1000;

pub async fn insert_owners(
    tx: &mut Transaction<'_, Postgres>,
    owners: &[OwnerSeed],
) -> Result<Vec<Uuid>, sqlx::Error> {
    let mut ids = Vec::with_capacity(owners.len());
    for chunk in owners.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO owners (username, password_hash) ");
        builder.push_values(chunk, |mut row, owner| {
            row.push_bind(&owner.username).push_bind(&owner.password_hash);
        });
        builder.push(" RETURNING id");
        ids.extend(builder.build_query_scalar::<Uuid>().fetch_all(&mut **tx).await?);
    }
    Ok(ids)
}

pub async fn insert_restaurants(
    tx: &mut Transaction<'_, Postgres>,
    restaurants: &[RestaurantSeed],
) -> Result<Vec<Uuid>, sqlx::Error> {
    let mut ids = Vec::with_capacity(restaurants.len());
    for chunk in restaurants.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO restaurants (owner_id, name) ");
        builder.push_values(chunk, |mut row, restaurant| {
            row.push_bind(restaurant.owner_id).push_bind(&restaurant.name);
        });
        builder.push(" RETURNING id");
        ids.extend(builder.build_query_scalar::<Uuid>().fetch_all(&mut **tx).await?);
    }
    Ok(ids)
}

pub async fn insert_staff(
    tx: &mut Transaction<'_, Postgres>,
    staff: &[StaffSeed],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for chunk in staff.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO staff (restaurant_id, username, password_hash) ",
        );
        builder.push_values(chunk, |mut row, member| {
            row.push_bind(member.restaurant_id)
                .push_bind(&member.username)
                .push_bind(&member.password_hash);
        });
        inserted += builder.build().execute(&mut **tx).await?.rows_affected();
    }
    Ok(inserted)
}

pub async fn insert_products(
    tx: &mut Transaction<'_, Postgres>,
    products: &[ProductSeed],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for chunk in products.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO products (restaurant_id, title, description, unit_price) ",
        );
        builder.push_values(chunk, |mut row, product| {
            row.push_bind(product.restaurant_id)
                .push_bind(&product.title)
                .push_bind(&product.description)
                .push_bind(product.unit_price);
        });
        inserted += builder.build().execute(&mut **tx).await?.rows_affected();
    }
    Ok(inserted)
}
