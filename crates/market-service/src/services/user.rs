//! User service
//!
//! Identity binding between a wallet and an external token.

use tracing::{instrument, warn};

use market_core::DomainError;

use crate::dto::{ModelResponse, UserModelInfoQuery, UserModelInfoResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::require;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the user bound to `token_id` and confirm they own `wallet_address`
    ///
    /// A missing user and a wallet mismatch produce the same not-found error,
    /// so the response does not reveal which tokens exist.
    #[instrument(skip(self, query), fields(token_id = %query.token_id))]
    pub async fn user_model_info(&self, query: UserModelInfoQuery) -> ServiceResult<UserModelInfoResponse> {
        require(&[
            ("Wallet address", query.wallet_address.as_str()),
            ("tokenId", query.token_id.as_str()),
        ])?;
        let token_id = query.token_id.trim();

        let user = match self.ctx.user_repo().find_by_external_token(token_id).await? {
            Some(user) if user.owns_wallet(&query.wallet_address) => user,
            Some(user) => {
                warn!(user_id = %user.id, "Wallet does not match the token's user");
                return Err(DomainError::IdentityMismatch.into());
            }
            None => return Err(DomainError::IdentityMismatch.into()),
        };

        let model = self
            .ctx
            .model_repo()
            .find_by_external_token(token_id)
            .await?;

        Ok(UserModelInfoResponse {
            user: UserResponse::from(&user),
            model: model.as_ref().map(ModelResponse::from),
        })
    }
}
