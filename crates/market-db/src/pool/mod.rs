//! Database connection pool management and schema setup

mod postgres;
mod schema;

pub use postgres::{create_pool, DatabaseConfig};
pub use schema::{ensure_schema, schema_statements};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
