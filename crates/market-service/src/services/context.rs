//! Service context - dependency container for services
//!
//! Holds the repositories, the store health probe and the ID generator. The
//! store handle itself stays inside the repositories.

use std::sync::Arc;

use market_core::{
    ModelRepository, Snowflake, SnowflakeGenerator, StoreHealth, SubscriptionRepository,
    UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    model_repo: Arc<dyn ModelRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
    store_health: Arc<dyn StoreHealth>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        model_repo: Arc<dyn ModelRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        store_health: Arc<dyn StoreHealth>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            model_repo,
            subscription_repo,
            store_health,
            snowflake_generator,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn model_repo(&self) -> &dyn ModelRepository {
        self.model_repo.as_ref()
    }

    pub fn subscription_repo(&self) -> &dyn SubscriptionRepository {
        self.subscription_repo.as_ref()
    }

    /// Store round-trip probe used by readiness checks
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === ID generation ===

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
///
/// The ID generator defaults to worker 0 when not supplied.
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    model_repo: Option<Arc<dyn ModelRepository>>,
    subscription_repo: Option<Arc<dyn SubscriptionRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn model_repo(mut self, repo: Arc<dyn ModelRepository>) -> Self {
        self.model_repo = Some(repo);
        self
    }

    pub fn subscription_repo(mut self, repo: Arc<dyn SubscriptionRepository>) -> Self {
        self.subscription_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository or the health probe is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.model_repo.ok_or_else(|| missing("model_repo"))?,
            self.subscription_repo.ok_or_else(|| missing("subscription_repo"))?,
            self.store_health.ok_or_else(|| missing("store_health"))?,
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("{dependency} is required"))
}
