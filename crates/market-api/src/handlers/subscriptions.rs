//! Subscription handlers
//!
//! Mounted once per chain; the chain arrives as a request extension set by
//! the chain's router.

use axum::extract::{Extension, State};
use market_core::Chain;
use market_service::{
    ListSubscriptionRequest, ListedSubscriptionResponse, PurchaseResponse,
    PurchaseSubscriptionRequest, SubscriptionResponse, SubscriptionService,
    UpdateSubscriptionRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Reply};
use crate::state::AppState;

/// POST /purchase-subscription{suffix}
pub async fn purchase(
    State(state): State<AppState>,
    Extension(chain): Extension<Chain>,
    ValidatedJson(request): ValidatedJson<PurchaseSubscriptionRequest>,
) -> ApiResult<Reply<PurchaseResponse>> {
    let service = SubscriptionService::new(state.service_context(), chain);
    let purchase = service.purchase(request).await?;
    Ok(Reply::new("Subscription purchased successfully", purchase))
}

/// PATCH /list-subscription{suffix}
pub async fn list(
    State(state): State<AppState>,
    Extension(chain): Extension<Chain>,
    ValidatedJson(request): ValidatedJson<ListSubscriptionRequest>,
) -> ApiResult<Reply<SubscriptionResponse>> {
    let service = SubscriptionService::new(state.service_context(), chain);
    let subscription = service.list(request).await?;
    Ok(Reply::new("Subscription listed successfully", subscription))
}

/// PATCH /update-subscription{suffix}
pub async fn update(
    State(state): State<AppState>,
    Extension(chain): Extension<Chain>,
    ValidatedJson(request): ValidatedJson<UpdateSubscriptionRequest>,
) -> ApiResult<Reply<SubscriptionResponse>> {
    let service = SubscriptionService::new(state.service_context(), chain);
    let subscription = service.update(request).await?;
    Ok(Reply::new("Subscription updated successfully", subscription))
}

/// GET /listed-subscriptions{suffix}
pub async fn listed(
    State(state): State<AppState>,
    Extension(chain): Extension<Chain>,
) -> ApiResult<Reply<Vec<ListedSubscriptionResponse>>> {
    let service = SubscriptionService::new(state.service_context(), chain);
    let listed = service.listed().await?;
    Ok(Reply::new("Listed subscriptions retrieved successfully", listed))
}
