//! Route definitions

use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use market_core::Chain;

use crate::handlers::{fallback, health, registration, subscriptions, users};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately so they
/// bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    let router = Router::new()
        .route("/register", post(registration::register_user))
        .route("/register-model", post(registration::register_model))
        .route("/user-model-info", get(users::user_model_info));

    Chain::ALL
        .into_iter()
        .fold(router, |router, chain| router.merge(chain_routes(chain)))
        // Must follow every route so each method router picks it up
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .fallback(fallback::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Subscription and user-info routes for one chain
fn chain_routes(chain: Chain) -> Router<AppState> {
    let suffix = chain.spec().route_suffix;
    Router::new()
        .route(
            &format!("/purchase-subscription{suffix}"),
            post(subscriptions::purchase),
        )
        .route(&format!("/list-subscription{suffix}"), patch(subscriptions::list))
        .route(&format!("/update-subscription{suffix}"), patch(subscriptions::update))
        .route(&format!("/listed-subscriptions{suffix}"), get(subscriptions::listed))
        .route(&format!("/user-info{suffix}"), get(users::user_info))
        .layer(Extension(chain))
}
