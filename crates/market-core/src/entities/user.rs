//! User entity - a marketplace account identified by username, email and wallet

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Registered marketplace user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub wallet_address: String,
    pub ipfs_url: Option<String>,
    /// External token the user's avatar/profile was minted as
    pub openai_token_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for a new user (validated before construction)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub wallet_address: String,
    pub ipfs_url: Option<String>,
    pub openai_token_id: Option<String>,
}

impl User {
    /// Materialize a registration with a freshly generated ID
    pub fn register(id: Snowflake, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            email: new.email,
            wallet_address: new.wallet_address,
            ipfs_url: new.ipfs_url,
            openai_token_id: new.openai_token_id,
            created_at: Utc::now(),
        }
    }

    /// Wallet comparison used by identity-binding checks
    pub fn owns_wallet(&self, wallet_address: &str) -> bool {
        self.wallet_address.eq_ignore_ascii_case(wallet_address.trim())
    }
}
