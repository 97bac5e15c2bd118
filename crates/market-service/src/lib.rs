//! # market-service
//!
//! Application layer: request DTOs and their required-field checks, the
//! registration flows, and the chain-parameterized subscription lifecycle.
//! Services only see the repository traits from `market-core`, so any store
//! adapter can sit underneath.

pub mod dto;
pub mod services;

pub use services::{
    RegistrationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SubscriptionService, UserService,
};

pub use dto::{
    Envelope, HealthResponse, ListSubscriptionRequest, ListedSubscriptionResponse, ModelResponse,
    PurchaseResponse, PurchaseSubscriptionRequest, ReadinessResponse, RegisterModelRequest,
    RegisterUserRequest, SubscriptionResponse, UpdateSubscriptionRequest, UserInfoQuery,
    UserInfoResponse, UserModelInfoQuery, UserModelInfoResponse, UserResponse,
};
