//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request.

pub mod context;
pub mod error;
pub mod registration;
pub mod subscription;
pub mod user;
pub mod validation;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use registration::RegistrationService;
pub use subscription::SubscriptionService;
pub use user::UserService;
