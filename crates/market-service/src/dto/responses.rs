//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use market_core::{Chain, ImageRef};

// ============================================================================
// Envelope
// ============================================================================

/// Uniform wrapper for every non-health response
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

// ============================================================================
// User / Model Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipfs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_token_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelResponse {
    pub id: String,
    pub name: String,
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub ipfs_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_token_id: Option<String>,
    pub slug: String,
    pub location: String,
    #[serde(rename = "aboutMe")]
    pub about_me: String,
    pub value: f64,
    pub views: i64,
    pub tease: i64,
    pub posts: i64,
    pub image: ImageRef,
    pub icon: ImageRef,
    pub created_at: DateTime<Utc>,
}

/// Display subset of a model embedded in listing entries
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub model_id: String,
    pub name: String,
    pub slug: String,
    pub location: String,
    #[serde(rename = "aboutMe")]
    pub about_me: String,
    pub value: f64,
    pub views: i64,
    pub tease: i64,
    pub posts: i64,
    pub image: ImageRef,
    pub icon: ImageRef,
    pub ipfs_url: String,
}

// ============================================================================
// Subscription Responses
// ============================================================================

/// A stored subscription row
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub chain: Chain,
    pub user_id: String,
    pub model_id: String,
    pub token_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub is_listed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub user_id: String,
    pub model_id: String,
    pub token_id: String,
}

/// A listed subscription joined with its model
#[derive(Debug, Clone, Serialize)]
pub struct ListedSubscriptionResponse {
    #[serde(flatten)]
    pub subscription: SubscriptionResponse,
    pub model: ModelInfo,
}

/// One owned subscription in a user-info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDetails {
    pub model_id: String,
    pub model_name: String,
    pub ipfs_url: String,
    pub token_id: String,
    pub is_listed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub user: UserResponse,
    pub subscriptions: Vec<SubscriptionDetails>,
}

/// `model` is null when no model carries the user's external token
#[derive(Debug, Clone, Serialize)]
pub struct UserModelInfoResponse {
    pub user: UserResponse,
    pub model: Option<ModelResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Individual health check results
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
