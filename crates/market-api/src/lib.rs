//! # market-api
//!
//! REST API server built with Axum framework.
//!
//! Every chain gets the same set of subscription routes, distinguished only by
//! the chain's route suffix (`/list-subscription`, `/list-subscription-metis`,
//! ...).

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
