//! User entity <-> model mapper

use market_core::{Snowflake, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            wallet_address: model.wallet_address,
            ipfs_url: model.ipfs_url,
            openai_token_id: model.openai_token_id,
            created_at: model.created_at,
        }
    }
}
