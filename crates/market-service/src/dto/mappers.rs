//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! request DTO to domain payload conversions.

use market_core::{Model, NewModel, NewUser, Subscription, User};

use super::requests::{RegisterModelRequest, RegisterUserRequest};
use super::responses::{
    ListedSubscriptionResponse, ModelInfo, ModelResponse, PurchaseResponse, SubscriptionDetails,
    SubscriptionResponse, UserResponse,
};
use crate::services::validation::non_blank;

// ============================================================================
// Request Mappers
// ============================================================================

impl From<RegisterUserRequest> for NewUser {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            username: req.username.trim().to_string(),
            email: req.email.trim().to_string(),
            wallet_address: req.wallet_address.trim().to_string(),
            ipfs_url: non_blank(req.ipfs_url.as_deref()),
            openai_token_id: non_blank(req.openai_token_id.as_deref()),
        }
    }
}

impl From<RegisterModelRequest> for NewModel {
    fn from(req: RegisterModelRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            model_id: req.model_id.trim().to_string(),
            email: non_blank(req.email.as_deref()),
            wallet_address: non_blank(req.wallet_address.as_deref()),
            ipfs_url: req.ipfs_url.trim().to_string(),
            openai_token_id: non_blank(req.openai_token_id.as_deref()),
            slug: req.slug,
            location: req.location,
            about_me: req.about_me,
            value: req.value,
            views: req.views,
            tease: req.tease,
            posts: req.posts,
            image: req.image,
            icon: req.icon,
        }
    }
}

// ============================================================================
// User / Model Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            wallet_address: user.wallet_address.clone(),
            ipfs_url: user.ipfs_url.clone(),
            openai_token_id: user.openai_token_id.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&Model> for ModelResponse {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.clone(),
            model_id: model.model_id.clone(),
            email: model.email.clone(),
            wallet_address: model.wallet_address.clone(),
            ipfs_url: model.ipfs_url.clone(),
            openai_token_id: model.openai_token_id.clone(),
            slug: model.slug.clone(),
            location: model.location.clone(),
            about_me: model.about_me.clone(),
            value: model.value,
            views: model.views,
            tease: model.tease,
            posts: model.posts,
            image: model.image.clone(),
            icon: model.icon.clone(),
            created_at: model.created_at,
        }
    }
}

impl From<&Model> for ModelInfo {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id.to_string(),
            model_id: model.model_id.clone(),
            name: model.name.clone(),
            slug: model.slug.clone(),
            location: model.location.clone(),
            about_me: model.about_me.clone(),
            value: model.value,
            views: model.views,
            tease: model.tease,
            posts: model.posts,
            image: model.image.clone(),
            icon: model.icon.clone(),
            ipfs_url: model.ipfs_url.clone(),
        }
    }
}

// ============================================================================
// Subscription Mappers
// ============================================================================

impl From<&Subscription> for SubscriptionResponse {
    fn from(sub: &Subscription) -> Self {
        Self {
            id: sub.id.to_string(),
            chain: sub.chain,
            user_id: sub.user_id.to_string(),
            model_id: sub.model_id.to_string(),
            token_id: sub.token_id.clone(),
            listing_id: sub.listing_id.clone(),
            price: sub.price.clone(),
            is_listed: sub.is_listed,
            created_at: sub.created_at,
            updated_at: sub.updated_at,
        }
    }
}

impl From<Subscription> for SubscriptionResponse {
    fn from(sub: Subscription) -> Self {
        Self::from(&sub)
    }
}

impl From<&Subscription> for PurchaseResponse {
    fn from(sub: &Subscription) -> Self {
        Self {
            user_id: sub.user_id.to_string(),
            model_id: sub.model_id.to_string(),
            token_id: sub.token_id.clone(),
        }
    }
}

impl ListedSubscriptionResponse {
    pub fn new(sub: &Subscription, model: &Model) -> Self {
        Self {
            subscription: SubscriptionResponse::from(sub),
            model: ModelInfo::from(model),
        }
    }
}

impl SubscriptionDetails {
    /// Owned-subscription entry; `model_id` is the model's business key
    pub fn new(sub: &Subscription, model: &Model) -> Self {
        Self {
            model_id: model.model_id.clone(),
            model_name: model.name.clone(),
            ipfs_url: model.ipfs_url.clone(),
            token_id: sub.token_id.clone(),
            is_listed: sub.is_listed,
            price: sub.price.clone(),
        }
    }
}
