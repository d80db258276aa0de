//! Ownership rules.
//!
//! Every lookup here is filtered by the caller, so a restaurant that does
//! not exist and one the caller has no rights over are indistinguishable:
//! both answer `401`.

use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use tableside_auth::Role;
use tableside_core::AppError;
use tableside_models::restaurants::Restaurant;
use tableside_observability::track_authorization_denied;

use crate::middleware::auth::AuthUser;

/// The restaurant, if `owner_id` owns it.
#[instrument(skip(db), fields(db.operation = "SELECT", db.table = "restaurants"))]
pub async fn ensure_restaurant_owner(
    db: &PgPool,
    restaurant_id: Uuid,
    owner_id: Uuid,
) -> Result<Restaurant, AppError> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT id, owner_id, name, created_at, updated_at
         FROM restaurants WHERE id = $1 AND owner_id = $2",
    )
    .bind(restaurant_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| {
        debug!(restaurant.id = %restaurant_id, owner.id = %owner_id, "Caller does not own restaurant");
        track_authorization_denied("restaurant_owner");
        AppError::unauthorized("You do not own this restaurant")
    })
}

/// Succeeds if `staff_id` was registered under `restaurant_id`.
#[instrument(skip(db), fields(db.operation = "SELECT", db.table = "staff"))]
pub async fn ensure_staff_member(
    db: &PgPool,
    restaurant_id: Uuid,
    staff_id: Uuid,
) -> Result<(), AppError> {
    let is_member = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM staff WHERE id = $1 AND restaurant_id = $2)",
    )
    .bind(staff_id)
    .bind(restaurant_id)
    .fetch_one(db)
    .await?;

    if !is_member {
        debug!(restaurant.id = %restaurant_id, staff.id = %staff_id, "Caller is not staff of restaurant");
        track_authorization_denied("restaurant_staff");
        return Err(AppError::unauthorized(
            "You are not a staff member of this restaurant",
        ));
    }

    Ok(())
}

/// Owner of the restaurant or one of its staff.
pub async fn ensure_restaurant_member(
    db: &PgPool,
    restaurant_id: Uuid,
    auth_user: &AuthUser,
) -> Result<(), AppError> {
    match auth_user.role {
        Role::Owner => ensure_restaurant_owner(db, restaurant_id, auth_user.user_id)
            .await
            .map(|_| ()),
        Role::Staff => ensure_staff_member(db, restaurant_id, auth_user.user_id).await,
    }
}
