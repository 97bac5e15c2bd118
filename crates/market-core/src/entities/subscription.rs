//! Subscription entity - ownership of one model's token on one chain

use chrono::{DateTime, Utc};

use crate::value_objects::{Chain, ListingFields, Snowflake};

/// A purchased subscription token
///
/// The same shape is stored for every chain; `listing_id` is only ever set on
/// the default chain and `price` never on ZkEVM (see [`ListingFields`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: Snowflake,
    pub chain: Chain,
    pub user_id: Snowflake,
    pub model_id: Snowflake,
    pub token_id: String,
    pub listing_id: Option<String>,
    pub price: Option<String>,
    pub is_listed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// A freshly purchased, unlisted subscription
    pub fn purchase(
        id: Snowflake,
        chain: Chain,
        user_id: Snowflake,
        model_id: Snowflake,
        token_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            chain,
            user_id,
            model_id,
            token_id,
            listing_id: None,
            price: None,
            is_listed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Listing fields written by a list operation; `None` leaves the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub price: Option<String>,
    pub listing_id: Option<String>,
}

impl Listing {
    /// Keep only the fields the chain records
    pub fn for_chain(fields: ListingFields, price: Option<String>, listing_id: Option<String>) -> Self {
        Self {
            price: price.filter(|_| fields.price),
            listing_id: listing_id.filter(|_| fields.listing_id),
        }
    }
}
