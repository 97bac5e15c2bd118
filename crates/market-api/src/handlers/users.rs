//! User lookup handlers

use axum::extract::{Extension, State};
use market_core::Chain;
use market_service::{
    SubscriptionService, UserInfoQuery, UserInfoResponse, UserModelInfoQuery,
    UserModelInfoResponse, UserService,
};

use crate::extractors::QueryParams;
use crate::response::{ApiResult, Reply};
use crate::state::AppState;

/// A user and the subscriptions they own on the route's chain
///
/// GET /user-info?wallet_address=, GET /user-info-{chain}?email=
pub async fn user_info(
    State(state): State<AppState>,
    Extension(chain): Extension<Chain>,
    QueryParams(query): QueryParams<UserInfoQuery>,
) -> ApiResult<Reply<UserInfoResponse>> {
    let service = SubscriptionService::new(state.service_context(), chain);
    let info = service.user_info(query).await?;
    Ok(Reply::new("User retrieved successfully", info))
}

/// GET /user-model-info?wallet_address=&tokenId=
pub async fn user_model_info(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserModelInfoQuery>,
) -> ApiResult<Reply<UserModelInfoResponse>> {
    let service = UserService::new(state.service_context());
    let info = service.user_model_info(query).await?;
    Ok(Reply::new("Data retrieved successfully", info))
}
