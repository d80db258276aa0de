//! # Tableside CLI
//!
//! Administration and seeding utilities used by the `tableside-cli` binary.
//!
//! ```ignore
//! use tableside_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(3).with_staff(4).with_products(12);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
