//! # Tableside DB
//!
//! PostgreSQL pool construction and the embedded schema migrations.
//!
//! The migrations under `migrations/` at the workspace root are compiled into
//! the binary, so the server and the CLI can bring a fresh database up to date
//! without shipping SQL files.
//!
//! # Example
//!
//! ```ignore
//! use tableside_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&config.database).await?;
//! run_migrations(&pool).await?;
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};
use tableside_config::DatabaseConfig;
use tracing::info;

pub use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects a pool sized by `config.max_connections`.
///
/// # Errors
///
/// Fails if the database cannot be reached; the caller is expected to abort
/// startup.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool initialized");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
