//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Chain, IdentityKey};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found with provided {key}")]
    UserNotFound { key: IdentityKey, value: String },

    #[error("Model not found with provided modelId: {0}")]
    ModelNotFound(String),

    #[error("Subscription not found: {token_id}")]
    SubscriptionNotFound { chain: Chain, token_id: String },

    /// Identity binding failed; deliberately indistinguishable from a miss
    #[error("No user matches the provided details")]
    IdentityMismatch,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists with the provided email, username, or wallet address")]
    UserAlreadyExists,

    #[error("Model already exists with the provided model_id: {0}")]
    ModelAlreadyExists(String),

    #[error("Token {token_id} already has a subscription on chain {chain}")]
    TokenAlreadyPurchased { chain: Chain, token_id: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "UNKNOWN_USER",
            Self::ModelNotFound(_) => "UNKNOWN_MODEL",
            Self::SubscriptionNotFound { .. } => "UNKNOWN_SUBSCRIPTION",
            Self::IdentityMismatch => "UNKNOWN_USER",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::ModelAlreadyExists(_) => "MODEL_ALREADY_EXISTS",
            Self::TokenAlreadyPurchased { .. } => "TOKEN_ALREADY_PURCHASED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::ModelNotFound(_)
                | Self::SubscriptionNotFound { .. }
                | Self::IdentityMismatch
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists
                | Self::ModelAlreadyExists(_)
                | Self::TokenAlreadyPurchased { .. }
        )
    }

    /// Shorthand for a missing user looked up by `key`
    pub fn user_not_found(key: IdentityKey, value: impl Into<String>) -> Self {
        Self::UserNotFound {
            key,
            value: value.into(),
        }
    }
}
