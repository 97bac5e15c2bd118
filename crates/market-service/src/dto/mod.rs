//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with shape validation for API inputs
//! - Response DTOs and the success/error envelope
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ListSubscriptionRequest, PurchaseSubscriptionRequest, RegisterModelRequest,
    RegisterUserRequest, UpdateSubscriptionRequest, UserInfoQuery, UserModelInfoQuery,
};

pub use responses::{
    Envelope, HealthChecks, HealthResponse, ListedSubscriptionResponse, ModelInfo, ModelResponse,
    PurchaseResponse, ReadinessResponse, SubscriptionDetails, SubscriptionResponse,
    UserInfoResponse, UserModelInfoResponse, UserResponse,
};
