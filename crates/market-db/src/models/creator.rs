//! Model (content creator) database model
//!
//! Named `CreatorModel` to keep "row model" and the domain `Model` apart.

use chrono::{DateTime, Utc};
use market_core::ImageRef;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the models table
#[derive(Debug, Clone, FromRow)]
pub struct CreatorModel {
    pub id: i64,
    pub name: String,
    pub model_id: String,
    pub email: Option<String>,
    pub wallet_address: Option<String>,
    pub ipfs_url: String,
    pub openai_token_id: Option<String>,
    pub slug: String,
    pub location: String,
    pub about_me: String,
    pub value: f64,
    pub views: i64,
    pub tease: i64,
    pub posts: i64,
    pub image: Json<ImageRef>,
    pub icon: Json<ImageRef>,
    pub created_at: DateTime<Utc>,
}
