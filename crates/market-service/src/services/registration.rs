//! Registration service
//!
//! Creates users and models. Both are written once and never updated.

use tracing::{info, instrument};

use market_core::{DomainError, Model, NewModel, NewUser, User};

use crate::dto::{ModelResponse, RegisterModelRequest, RegisterUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::require;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user
    ///
    /// Username, email and wallet address are each unique. Duplicates are
    /// caught by a lookup first; the store's unique indexes catch the
    /// concurrent case.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_user(&self, request: RegisterUserRequest) -> ServiceResult<UserResponse> {
        require(&[
            ("Username", request.username.as_str()),
            ("email", request.email.as_str()),
            ("wallet address", request.wallet_address.as_str()),
        ])?;

        let new_user = NewUser::from(request);
        let taken = self
            .ctx
            .user_repo()
            .exists_any(&new_user.username, &new_user.email, &new_user.wallet_address)
            .await?;
        if taken {
            return Err(DomainError::UserAlreadyExists.into());
        }

        let user = User::register(self.ctx.generate_id(), new_user);
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User registered");
        Ok(UserResponse::from(&user))
    }

    /// Register a model; `model_id` must be unique
    #[instrument(skip(self, request), fields(model_id = %request.model_id))]
    pub async fn register_model(&self, request: RegisterModelRequest) -> ServiceResult<ModelResponse> {
        require(&[
            ("Name", request.name.as_str()),
            ("model_id", request.model_id.as_str()),
            ("ipfs_url", request.ipfs_url.as_str()),
        ])?;

        let model = Model::register(self.ctx.generate_id(), NewModel::from(request));
        self.ctx.model_repo().create(&model).await?;

        info!(id = %model.id, model_id = %model.model_id, "Model registered");
        Ok(ModelResponse::from(&model))
    }
}
