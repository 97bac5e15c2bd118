//! Subscription database model (shared by every chain table)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for `subscriptions` and its per-chain siblings
///
/// Rows carry no chain column; the chain is known from the table queried.
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionModel {
    pub id: i64,
    pub user_id: i64,
    pub model_id: i64,
    pub token_id: String,
    pub listing_id: Option<String>,
    pub price: Option<String>,
    pub is_listed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
