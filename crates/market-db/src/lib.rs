//! # market-db
//!
//! Document store adapter implementing the `market-core` repository traits
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent schema setup with the uniqueness indexes the domain relies on
//! - Row models with SQLx `FromRow` derives and row → entity mappers
//! - Repository implementations (one subscription table per chain)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use market_db::{create_pool, ensure_schema, DatabaseConfig, PgUserRepository};
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new(url, 20, 2)).await?;
//!     ensure_schema(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{
    PgModelRepository, PgStoreHealth, PgSubscriptionRepository, PgUserRepository,
};
