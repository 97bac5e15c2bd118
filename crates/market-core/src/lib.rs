//! # market-core
//!
//! Domain layer for the subscription marketplace: entities, the per-chain
//! capability table, identifiers, and the repository traits the store adapter
//! implements. No infrastructure dependencies live here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ImageRef, Listing, Model, NewModel, NewUser, Subscription, User};
pub use error::DomainError;
pub use traits::{
    ModelRepository, RepoResult, StoreHealth, SubscriptionRepository, UserRepository,
};
pub use value_objects::{
    Chain, ChainSpec, IdentityKey, ListingFields, Snowflake, SnowflakeGenerator,
    SnowflakeParseError,
};
