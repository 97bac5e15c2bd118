//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub wallet_address: String,
    pub ipfs_url: Option<String>,
    pub openai_token_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
