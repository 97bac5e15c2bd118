//! Row model -> entity mappers
//!
//! - `From<Row> for Entity` for tables whose rows fully describe the entity
//! - `SubscriptionModel::into_entity` where the chain comes from the table name

mod creator;
mod subscription;
mod user;
