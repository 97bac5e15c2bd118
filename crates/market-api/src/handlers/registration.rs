//! Registration handlers

use axum::extract::State;
use market_service::{
    ModelResponse, RegisterModelRequest, RegisterUserRequest, RegistrationService, UserResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, Reply};
use crate::state::AppState;

/// Register a user
///
/// POST /register
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<Created<Reply<UserResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let user = service.register_user(request).await?;
    Ok(Created(Reply::new("User registered successfully", user)))
}

/// Register a model
///
/// POST /register-model
pub async fn register_model(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterModelRequest>,
) -> ApiResult<Created<Reply<ModelResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let model = service.register_model(request).await?;
    Ok(Created(Reply::new("Model registered successfully", model)))
}
