//! Model entity - a content creator whose subscriptions are sold as tokens

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Nested image reference (`{"src": "..."}` on the wire)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub src: String,
}

/// Registered model (content creator)
///
/// `model_id` is the externally assigned business key; `id` is generated and
/// only used to link subscriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub id: Snowflake,
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
    pub image: ImageRef,
    pub icon: ImageRef,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for a new model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewModel {
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
    pub image: ImageRef,
    pub icon: ImageRef,
}

impl Model {
    pub fn register(id: Snowflake, new: NewModel) -> Self {
        Self {
            id,
            name: new.name,
            model_id: new.model_id,
            email: new.email,
            wallet_address: new.wallet_address,
            ipfs_url: new.ipfs_url,
            openai_token_id: new.openai_token_id,
            slug: new.slug,
            location: new.location,
            about_me: new.about_me,
            value: new.value,
            views: new.views,
            tease: new.tease,
            posts: new.posts,
            image: new.image,
            icon: new.icon,
            created_at: Utc::now(),
        }
    }
}
