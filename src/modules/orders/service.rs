//! Orders are created by staff of the restaurant and then moved through
//! the status machine by any member (owner or staff).

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use tableside_core::AppError;
use tableside_observability::{track_order_created, track_order_status_changed};

use crate::middleware::auth::AuthUser;
use crate::utils::auth_helpers::{ensure_restaurant_member, ensure_staff_member};

use super::model::{
    CreateOrderDto, Order, OrderItem, OrderStatus, OrderWithItems, UpdateOrderStatusDto,
    calculate_total,
};

pub struct OrderService;

impl OrderService {
    /// Prices every line from the current catalog and writes the order and
    /// its items in one transaction.
    #[instrument(skip(db, dto), fields(order.lines = dto.products.len(), db.operation = "INSERT", db.table = "orders"))]
    pub async fn create_order(
        db: &PgPool,
        restaurant_id: Uuid,
        staff_id: Uuid,
        dto: CreateOrderDto,
    ) -> Result<OrderWithItems, AppError> {
        ensure_staff_member(db, restaurant_id, staff_id).await?;

        let mut product_ids: Vec<Uuid> = dto.products.iter().map(|line| line.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        let prices: HashMap<Uuid, f64> = sqlx::query_as::<_, (Uuid, f64)>(
            "SELECT id, unit_price FROM products WHERE restaurant_id = $1 AND id = ANY($2)",
        )
        .bind(restaurant_id)
        .bind(product_ids.as_slice())
        .fetch_all(db)
        .await?
        .into_iter()
        .collect();

        let mut lines = Vec::with_capacity(dto.products.len());
        for line in &dto.products {
            let unit_price = prices.get(&line.product_id).copied().ok_or_else(|| {
                debug!(product.id = %line.product_id, "Product not in restaurant catalog");
                AppError::not_found(anyhow::anyhow!(
                    "Product {} not found in this restaurant",
                    line.product_id
                ))
            })?;
            lines.push((line.product_id, line.quantity, unit_price));
        }

        let total_amount = calculate_total(lines.iter().map(|&(_, qty, price)| (qty, price)));

        let mut tx = db.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (restaurant_id, staff_id, table_number, total_amount)
             VALUES ($1, $2, $3, $4)
             RETURNING id, restaurant_id, staff_id, table_number, status, total_amount,
                       created_at, updated_at",
        )
        .bind(restaurant_id)
        .bind(staff_id)
        .bind(&dto.table_number)
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(lines.len());
        for (product_id, quantity, unit_price) in lines {
            let item = sqlx::query_as::<_, OrderItem>(
                "INSERT INTO order_items (order_id, product_id, quantity, unit_price)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, order_id, product_id, quantity, unit_price",
            )
            .bind(order.id)
            .bind(product_id)
            .bind(quantity)
            .bind(unit_price)
            .fetch_one(&mut *tx)
            .await?;
            items.push(item);
        }

        tx.commit().await?;

        track_order_created(total_amount);
        info!(
            order.id = %order.id,
            restaurant.id = %restaurant_id,
            order.total_amount = total_amount,
            "Order created"
        );

        Ok(OrderWithItems { order, items })
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "orders"))]
    pub async fn list_orders(
        db: &PgPool,
        restaurant_id: Uuid,
        auth_user: &AuthUser,
    ) -> Result<Vec<Order>, AppError> {
        ensure_restaurant_member(db, restaurant_id, auth_user).await?;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, restaurant_id, staff_id, table_number, status, total_amount,
                    created_at, updated_at
             FROM orders WHERE restaurant_id = $1
             ORDER BY created_at DESC",
        )
        .bind(restaurant_id)
        .fetch_all(db)
        .await?;

        debug!(count = orders.len(), "Orders fetched");

        Ok(orders)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "orders"))]
    pub async fn get_order(
        db: &PgPool,
        restaurant_id: Uuid,
        order_id: Uuid,
        auth_user: &AuthUser,
    ) -> Result<OrderWithItems, AppError> {
        ensure_restaurant_member(db, restaurant_id, auth_user).await?;

        let order = Self::find_order(db, restaurant_id, order_id).await?;

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, quantity, unit_price
             FROM order_items WHERE order_id = $1
             ORDER BY created_at, id",
        )
        .bind(order.id)
        .fetch_all(db)
        .await?;

        Ok(OrderWithItems { order, items })
    }

    /// Moves an order to `dto.status` if the status machine allows it.
    ///
    /// The update is conditional on the status read first, so two racing
    /// changes cannot both succeed.
    #[instrument(skip(db, dto), fields(order.next_status = %dto.status, db.operation = "UPDATE", db.table = "orders"))]
    pub async fn update_status(
        db: &PgPool,
        restaurant_id: Uuid,
        order_id: Uuid,
        auth_user: &AuthUser,
        dto: UpdateOrderStatusDto,
    ) -> Result<Order, AppError> {
        ensure_restaurant_member(db, restaurant_id, auth_user).await?;

        let current = Self::find_order(db, restaurant_id, order_id).await?;

        if !current.status.can_transition_to(dto.status) {
            warn!(
                order.id = %order_id,
                from = %current.status,
                to = %dto.status,
                "Illegal order status transition"
            );
            return Err(AppError::conflict(anyhow::anyhow!(
                "Cannot move order from {} to {}",
                current.status,
                dto.status
            )));
        }

        let updated = sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $1, updated_at = NOW()
             WHERE id = $2 AND restaurant_id = $3 AND status = $4
             RETURNING id, restaurant_id, staff_id, table_number, status, total_amount,
                       created_at, updated_at",
        )
        .bind(dto.status)
        .bind(order_id)
        .bind(restaurant_id)
        .bind(current.status)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            warn!(order.id = %order_id, "Order status changed concurrently");
            AppError::conflict(anyhow::anyhow!(
                "Order status changed concurrently, reload and retry"
            ))
        })?;

        track_order_status_changed(updated.status.as_str());
        info!(order.id = %order_id, status = %updated.status, "Order status updated");

        Ok(updated)
    }

    async fn find_order(db: &PgPool, restaurant_id: Uuid, order_id: Uuid) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>(
            "SELECT id, restaurant_id, staff_id, table_number, status, total_amount,
                    created_at, updated_at
             FROM orders WHERE id = $1 AND restaurant_id = $2",
        )
        .bind(order_id)
        .bind(restaurant_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Order not found")))
    }
}
