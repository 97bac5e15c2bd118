//! PostgreSQL implementation of SubscriptionRepository
//!
//! Every chain has its own table with the same columns. Table names come from
//! `Chain::table()` and are never user input.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::{
    Chain, DomainError, Listing, RepoResult, Snowflake, Subscription, SubscriptionRepository,
};

use crate::models::SubscriptionModel;

use super::error::{map_db_error, map_unique_violation};

const SUBSCRIPTION_COLUMNS: &str =
    "id, user_id, model_id, token_id, listing_id, price, is_listed, created_at, updated_at";

/// PostgreSQL implementation of SubscriptionRepository
#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn entities(chain: Chain, rows: Vec<SubscriptionModel>) -> Vec<Subscription> {
        rows.into_iter().map(|row| row.into_entity(chain)).collect()
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[instrument(skip(self, subscription), fields(chain = %subscription.chain, token_id = %subscription.token_id))]
    async fn create(&self, subscription: &Subscription) -> RepoResult<()> {
        let sql = format!(
            r"
            INSERT INTO {} (id, user_id, model_id, token_id, listing_id, price, is_listed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
            subscription.chain.table()
        );

        sqlx::query(&sql)
            .bind(subscription.id.into_inner())
            .bind(subscription.user_id.into_inner())
            .bind(subscription.model_id.into_inner())
            .bind(&subscription.token_id)
            .bind(&subscription.listing_id)
            .bind(&subscription.price)
            .bind(subscription.is_listed)
            .bind(subscription.created_at)
            .bind(subscription.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || DomainError::TokenAlreadyPurchased {
                    chain: subscription.chain,
                    token_id: subscription.token_id.clone(),
                })
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, chain: Chain, user_id: Snowflake) -> RepoResult<Vec<Subscription>> {
        let sql = format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM {} WHERE user_id = $1 ORDER BY created_at, id",
            chain.table()
        );
        let rows = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Self::entities(chain, rows))
    }

    #[instrument(skip(self))]
    async fn find_listed(&self, chain: Chain) -> RepoResult<Vec<Subscription>> {
        let sql = format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM {} WHERE is_listed ORDER BY updated_at, id",
            chain.table()
        );
        let rows = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Self::entities(chain, rows))
    }

    #[instrument(skip(self))]
    async fn mark_listed(
        &self,
        chain: Chain,
        token_id: &str,
        listing: &Listing,
    ) -> RepoResult<Option<Subscription>> {
        let sql = format!(
            r"
            UPDATE {}
            SET is_listed = TRUE,
                price = COALESCE($2, price),
                listing_id = COALESCE($3, listing_id),
                updated_at = NOW()
            WHERE token_id = $1
            RETURNING {SUBSCRIPTION_COLUMNS}
            ",
            chain.table()
        );
        let result = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(token_id)
            .bind(&listing.price)
            .bind(&listing.listing_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|row| row.into_entity(chain)))
    }

    #[instrument(skip(self))]
    async fn transfer(
        &self,
        chain: Chain,
        token_id: &str,
        new_owner: Snowflake,
    ) -> RepoResult<Option<Subscription>> {
        let sql = format!(
            r"
            UPDATE {}
            SET user_id = $2, is_listed = FALSE, updated_at = NOW()
            WHERE token_id = $1
            RETURNING {SUBSCRIPTION_COLUMNS}
            ",
            chain.table()
        );
        let result = sqlx::query_as::<_, SubscriptionModel>(&sql)
            .bind(token_id)
            .bind(new_owner.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|row| row.into_entity(chain)))
    }
}
