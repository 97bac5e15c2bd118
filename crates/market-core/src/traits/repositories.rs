//! Repository traits (ports) - the document store contract
//!
//! The domain layer defines point lookups by business key, filtered scans,
//! single inserts, and atomic find-and-update-with-return. The infrastructure
//! layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{Listing, Model, Subscription, User};
use crate::error::DomainError;
use crate::value_objects::{Chain, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn find_by_wallet(&self, wallet_address: &str) -> RepoResult<Option<User>>;

    /// Find the user bound to an external token
    async fn find_by_external_token(&self, token_id: &str) -> RepoResult<Option<User>>;

    /// Check whether any of the three unique keys is already taken
    async fn exists_any(&self, username: &str, email: &str, wallet_address: &str)
        -> RepoResult<bool>;

    /// Insert a new user
    ///
    /// Fails with `UserAlreadyExists` if a unique key collides.
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Model Repository
// ============================================================================

#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Find model by generated ID (used for subscription joins)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Model>>;

    /// Find model by its business key
    async fn find_by_model_id(&self, model_id: &str) -> RepoResult<Option<Model>>;

    async fn find_by_external_token(&self, token_id: &str) -> RepoResult<Option<Model>>;

    /// Insert a new model
    ///
    /// Fails with `ModelAlreadyExists` if `model_id` collides.
    async fn create(&self, model: &Model) -> RepoResult<()>;
}

// ============================================================================
// Subscription Repository
// ============================================================================

/// Subscription storage, one table per [`Chain`]
///
/// Each mutating method is a single atomic store operation.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a purchased subscription into `subscription.chain`'s table
    ///
    /// Fails with `TokenAlreadyPurchased` if the token already has a row.
    async fn create(&self, subscription: &Subscription) -> RepoResult<()>;

    /// All subscriptions owned by a user on a chain
    async fn find_by_owner(&self, chain: Chain, user_id: Snowflake) -> RepoResult<Vec<Subscription>>;

    /// All subscriptions currently listed for resale on a chain
    async fn find_listed(&self, chain: Chain) -> RepoResult<Vec<Subscription>>;

    /// Set `is_listed` and the provided listing fields; returns the updated row
    async fn mark_listed(
        &self,
        chain: Chain,
        token_id: &str,
        listing: &Listing,
    ) -> RepoResult<Option<Subscription>>;

    /// Reassign the owner and clear `is_listed`; returns the updated row
    async fn transfer(
        &self,
        chain: Chain,
        token_id: &str,
        new_owner: Snowflake,
    ) -> RepoResult<Option<Subscription>>;
}

// ============================================================================
// Store Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the store; used by readiness probes
    async fn ping(&self) -> RepoResult<()>;
}
