//! PostgreSQL implementation of ModelRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use market_core::{DomainError, Model, ModelRepository, RepoResult, Snowflake};

use crate::models::CreatorModel;

use super::error::{map_db_error, map_unique_violation};

const MODEL_COLUMNS: &str = "id, name, model_id, email, wallet_address, ipfs_url, openai_token_id, \
     slug, location, about_me, value, views, tease, posts, image, icon, created_at";

/// PostgreSQL implementation of ModelRepository
#[derive(Clone)]
pub struct PgModelRepository {
    pool: PgPool,
}

impl PgModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &str, value: &str) -> RepoResult<Option<Model>> {
        let sql = format!("SELECT {MODEL_COLUMNS} FROM models WHERE {column} = $1 LIMIT 1");
        let result = sqlx::query_as::<_, CreatorModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Model::from))
    }
}

#[async_trait]
impl ModelRepository for PgModelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Model>> {
        let sql = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = $1");
        let result = sqlx::query_as::<_, CreatorModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Model::from))
    }

    #[instrument(skip(self))]
    async fn find_by_model_id(&self, model_id: &str) -> RepoResult<Option<Model>> {
        self.find_one_by("model_id", model_id).await
    }

    #[instrument(skip(self))]
    async fn find_by_external_token(&self, token_id: &str) -> RepoResult<Option<Model>> {
        self.find_one_by("openai_token_id", token_id).await
    }

    #[instrument(skip(self, model), fields(model_id = %model.model_id))]
    async fn create(&self, model: &Model) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO models (id, name, model_id, email, wallet_address, ipfs_url, openai_token_id,
                                slug, location, about_me, value, views, tease, posts, image, icon, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(model.id.into_inner())
        .bind(&model.name)
        .bind(&model.model_id)
        .bind(&model.email)
        .bind(&model.wallet_address)
        .bind(&model.ipfs_url)
        .bind(&model.openai_token_id)
        .bind(&model.slug)
        .bind(&model.location)
        .bind(&model.about_me)
        .bind(model.value)
        .bind(model.views)
        .bind(model.tease)
        .bind(model.posts)
        .bind(Json(&model.image))
        .bind(Json(&model.icon))
        .bind(model.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::ModelAlreadyExists(model.model_id.clone()))
        })?;

        Ok(())
    }
}
