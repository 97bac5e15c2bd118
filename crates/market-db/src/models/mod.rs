//! Database row models
//!
//! These structs map directly to table rows and derive `FromRow`.

mod creator;
mod subscription;
mod user;

pub use creator::CreatorModel;
pub use subscription::SubscriptionModel;
pub use user::UserModel;
