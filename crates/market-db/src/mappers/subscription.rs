//! Subscription entity <-> model mapper

use market_core::{Chain, Snowflake, Subscription};

use crate::models::SubscriptionModel;

impl SubscriptionModel {
    /// Convert a row read from `chain`'s table into the domain entity
    pub fn into_entity(self, chain: Chain) -> Subscription {
        Subscription {
            id: Snowflake::new(self.id),
            chain,
            user_id: Snowflake::new(self.user_id),
            model_id: Snowflake::new(self.model_id),
            token_id: self.token_id,
            listing_id: self.listing_id,
            price: self.price,
            is_listed: self.is_listed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
