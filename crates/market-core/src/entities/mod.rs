//! Domain entities - users, models, and subscriptions

mod model;
mod subscription;
mod user;

pub use model::{ImageRef, Model, NewModel};
pub use subscription::{Listing, Subscription};
pub use user::{NewUser, User};
