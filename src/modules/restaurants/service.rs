use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use tableside_auth::Role;
use tableside_core::{AppError, hash_password_blocking};
use tableside_observability::track_identity_registered;

use crate::middleware::auth::AuthUser;
use crate::utils::auth_helpers::ensure_restaurant_owner;

use super::model::{CreateRestaurantDto, CreateStaffDto, Restaurant, Staff};

pub struct RestaurantService;

impl RestaurantService {
    #[instrument(skip(db, dto), fields(restaurant.name = %dto.name, db.operation = "INSERT", db.table = "restaurants"))]
    pub async fn create_restaurant(
        db: &PgPool,
        owner_id: Uuid,
        dto: CreateRestaurantDto,
    ) -> Result<Restaurant, AppError> {
        debug!("Creating restaurant");

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (owner_id, name) VALUES ($1, $2)
             RETURNING id, owner_id, name, created_at, updated_at",
        )
        .bind(owner_id)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(restaurant.name = %dto.name, "Owner already has a restaurant with this name");
                return AppError::conflict(anyhow::anyhow!(
                    "You already own a restaurant with this name"
                ));
            }
            error!(error = %e, "Database error creating restaurant");
            AppError::from(e)
        })?;

        info!(restaurant.id = %restaurant.id, "Restaurant created");

        Ok(restaurant)
    }

    /// Owners see the restaurants they own, staff the one they work at.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "restaurants"))]
    pub async fn list_restaurants(
        db: &PgPool,
        auth_user: &AuthUser,
    ) -> Result<Vec<Restaurant>, AppError> {
        let sql = match auth_user.role {
            Role::Owner => {
                "SELECT id, owner_id, name, created_at, updated_at
                 FROM restaurants WHERE owner_id = $1
                 ORDER BY created_at DESC"
            }
            Role::Staff => {
                "SELECT r.id, r.owner_id, r.name, r.created_at, r.updated_at
                 FROM restaurants r
                 JOIN staff s ON s.restaurant_id = r.id
                 WHERE s.id = $1"
            }
        };

        let restaurants = sqlx::query_as::<_, Restaurant>(sql)
            .bind(auth_user.user_id)
            .fetch_all(db)
            .await?;

        debug!(count = restaurants.len(), "Restaurants fetched");

        Ok(restaurants)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "restaurants"))]
    pub async fn get_restaurant(db: &PgPool, restaurant_id: Uuid) -> Result<Restaurant, AppError> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT id, owner_id, name, created_at, updated_at FROM restaurants WHERE id = $1",
        )
        .bind(restaurant_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Restaurant not found")))
    }

    /// Registers a staff member under a restaurant `owner_id` owns.
    #[instrument(skip(db, dto), fields(staff.username = %dto.username, db.operation = "INSERT", db.table = "staff"))]
    pub async fn register_staff(
        db: &PgPool,
        restaurant_id: Uuid,
        owner_id: Uuid,
        dto: CreateStaffDto,
    ) -> Result<Staff, AppError> {
        ensure_restaurant_owner(db, restaurant_id, owner_id).await?;

        let password_hash = hash_password_blocking(dto.password).await?;

        let staff = sqlx::query_as::<_, Staff>(
            "INSERT INTO staff (restaurant_id, username, password_hash) VALUES ($1, $2, $3)
             RETURNING id, restaurant_id, username, created_at, updated_at",
        )
        .bind(restaurant_id)
        .bind(&dto.username)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(staff.username = %dto.username, "Staff username already taken");
                return AppError::conflict(anyhow::anyhow!("Username already taken"));
            }
            error!(error = %e, "Database error registering staff");
            AppError::from(e)
        })?;

        track_identity_registered(Role::Staff.as_str());
        info!(staff.id = %staff.id, restaurant.id = %restaurant_id, "Staff registered");

        Ok(staff)
    }
}
