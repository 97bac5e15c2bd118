//! Model entity <-> creator row mapper

use market_core::{Model, Snowflake};

use crate::models::CreatorModel;

impl From<CreatorModel> for Model {
    fn from(row: CreatorModel) -> Self {
        Model {
            id: Snowflake::new(row.id),
            name: row.name,
            model_id: row.model_id,
            email: row.email,
            wallet_address: row.wallet_address,
            ipfs_url: row.ipfs_url,
            openai_token_id: row.openai_token_id,
            slug: row.slug,
            location: row.location,
            about_me: row.about_me,
            value: row.value,
            views: row.views,
            tease: row.tease,
            posts: row.posts,
            image: row.image.0,
            icon: row.icon.0,
            created_at: row.created_at,
        }
    }
}
