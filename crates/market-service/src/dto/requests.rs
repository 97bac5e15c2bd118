//! Request DTOs for API endpoints
//!
//! Business-key fields default to empty so that a missing key surfaces as the
//! operation's "... are required" message instead of a decode error. The
//! `Validate` derives only bound lengths and numeric ranges; presence is
//! checked by the services.

use serde::Deserialize;
use validator::Validate;

use market_core::ImageRef;

// ============================================================================
// Registration Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Wallet address must be at most 128 characters"))]
    pub wallet_address: String,

    #[validate(length(max = 2048, message = "IPFS URL must be at most 2048 characters"))]
    pub ipfs_url: Option<String>,

    #[validate(length(max = 128, message = "Token id must be at most 128 characters"))]
    pub openai_token_id: Option<String>,
}

/// Model registration request
///
/// Display fields are optional and default to empty/zero.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterModelRequest {
    #[serde(default)]
    #[validate(length(max = 128, message = "Name must be at most 128 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "model_id must be at most 128 characters"))]
    pub model_id: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "IPFS URL must be at most 2048 characters"))]
    pub ipfs_url: String,

    pub email: Option<String>,
    pub wallet_address: Option<String>,
    pub openai_token_id: Option<String>,

    #[serde(default)]
    #[validate(length(max = 128, message = "Slug must be at most 128 characters"))]
    pub slug: String,

    #[serde(default)]
    #[validate(length(max = 256, message = "Location must be at most 256 characters"))]
    pub location: String,

    #[serde(default, rename = "aboutMe", alias = "about_me")]
    #[validate(length(max = 4000, message = "About me must be at most 4000 characters"))]
    pub about_me: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "Value must not be negative"))]
    pub value: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Views must not be negative"))]
    pub views: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Tease must not be negative"))]
    pub tease: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Posts must not be negative"))]
    pub posts: i64,

    #[serde(default)]
    pub image: ImageRef,

    #[serde(default)]
    pub icon: ImageRef,
}

// ============================================================================
// Subscription Requests
// ============================================================================

/// Purchase a subscription token (every chain)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSubscriptionRequest {
    #[serde(default)]
    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "modelId must be at most 128 characters"))]
    pub model_id: String,

    #[serde(default)]
    #[validate(length(max = 256, message = "tokenId must be at most 256 characters"))]
    pub token_id: String,
}

/// Put a subscription up for resale
///
/// Fields the chain does not record are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscriptionRequest {
    #[serde(default)]
    #[validate(length(max = 256, message = "tokenId must be at most 256 characters"))]
    pub token_id: String,

    #[validate(length(max = 64, message = "Price must be at most 64 characters"))]
    pub price: Option<String>,

    #[validate(length(max = 256, message = "listingId must be at most 256 characters"))]
    pub listing_id: Option<String>,
}

/// Reassign a subscription to a new owner and take it off the market
///
/// The default chain resolves the owner by wallet address, the others by
/// email. Older clients send `TokenId`/`WalletAddress`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[serde(default, alias = "TokenId", alias = "token_id")]
    #[validate(length(max = 256, message = "tokenId must be at most 256 characters"))]
    pub token_id: String,

    #[serde(alias = "WalletAddress", alias = "wallet_address")]
    pub wallet_address: Option<String>,

    #[serde(alias = "Email")]
    pub email: Option<String>,
}

// ============================================================================
// Queries
// ============================================================================

/// `?wallet_address=` on the default chain, `?email=` elsewhere
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfoQuery {
    pub wallet_address: Option<String>,
    pub email: Option<String>,
}

/// `?wallet_address=&tokenId=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserModelInfoQuery {
    #[serde(default)]
    pub wallet_address: String,

    #[serde(default, rename = "tokenId", alias = "token_id")]
    pub token_id: String,
}
