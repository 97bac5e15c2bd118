//! Route handlers
//!
//! Thin adapters: decode the request, call one service method, wrap the
//! result in an envelope.

pub mod fallback;
pub mod health;
pub mod registration;
pub mod subscriptions;
pub mod users;
