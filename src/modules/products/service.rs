use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use tableside_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::utils::auth_helpers::{ensure_restaurant_member, ensure_restaurant_owner};

use super::model::{CreateProductDto, Product};

pub struct ProductService;

impl ProductService {
    #[instrument(skip(db, dto), fields(product.title = %dto.title, db.operation = "INSERT", db.table = "products"))]
    pub async fn create_product(
        db: &PgPool,
        restaurant_id: Uuid,
        owner_id: Uuid,
        dto: CreateProductDto,
    ) -> Result<Product, AppError> {
        ensure_restaurant_owner(db, restaurant_id, owner_id).await?;

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (restaurant_id, title, description, unit_price)
             VALUES ($1, $2, $3, $4)
             RETURNING id, restaurant_id, title, description, unit_price, created_at, updated_at",
        )
        .bind(restaurant_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.unit_price)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(product.title = %dto.title, "Duplicate product title");
                return AppError::conflict(anyhow::anyhow!(
                    "A product with this title already exists"
                ));
            }
            error!(error = %e, "Database error creating product");
            AppError::from(e)
        })?;

        info!(product.id = %product.id, restaurant.id = %restaurant_id, "Product created");

        Ok(product)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "products"))]
    pub async fn list_products(
        db: &PgPool,
        restaurant_id: Uuid,
        auth_user: &AuthUser,
    ) -> Result<Vec<Product>, AppError> {
        ensure_restaurant_member(db, restaurant_id, auth_user).await?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, restaurant_id, title, description, unit_price, created_at, updated_at
             FROM products WHERE restaurant_id = $1
             ORDER BY title",
        )
        .bind(restaurant_id)
        .fetch_all(db)
        .await?;

        debug!(count = products.len(), "Products fetched");

        Ok(products)
    }
}
