//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::{DomainError, RepoResult, User, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str =
    "id, username, email, wallet_address, ipfs_url, openai_token_id, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &str, value: &str) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1 LIMIT 1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one_by("email", email).await
    }

    #[instrument(skip(self))]
    async fn find_by_wallet(&self, wallet_address: &str) -> RepoResult<Option<User>> {
        self.find_one_by("wallet_address", wallet_address).await
    }

    #[instrument(skip(self))]
    async fn find_by_external_token(&self, token_id: &str) -> RepoResult<Option<User>> {
        self.find_one_by("openai_token_id", token_id).await
    }

    #[instrument(skip(self))]
    async fn exists_any(
        &self,
        username: &str,
        email: &str,
        wallet_address: &str,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE username = $1 OR email = $2 OR wallet_address = $3
            )
            ",
        )
        .bind(username)
        .bind(email)
        .bind(wallet_address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, email, wallet_address, ipfs_url, openai_token_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.wallet_address)
        .bind(&user.ipfs_url)
        .bind(&user.openai_token_id)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists))?;

        Ok(())
    }
}
