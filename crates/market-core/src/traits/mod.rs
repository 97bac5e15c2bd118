//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ModelRepository, RepoResult, StoreHealth, SubscriptionRepository, UserRepository,
};
