//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in market-core.

mod error;
mod health;
mod model;
mod subscription;
mod user;

pub use health::PgStoreHealth;
pub use model::PgModelRepository;
pub use subscription::PgSubscriptionRepository;
pub use user::PgUserRepository;
