//! Enveloped responses for requests no route handles

use crate::response::ApiError;

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
