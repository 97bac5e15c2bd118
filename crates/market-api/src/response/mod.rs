//! Response types and error handling for API endpoints
//!
//! Every response body is an [`Envelope`]: `{success, message?, data?, error?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use market_service::{Envelope, ServiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Body was not valid JSON for the endpoint; the detail is only logged
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidBody(_) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Text placed in the envelope's `error` field
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Service(e) => e.client_message(),
            Self::Validation(errors) => validation_message(errors),
            Self::InvalidBody(_) => "Invalid request body".to_string(),
            Self::InvalidQuery(_) | Self::RouteNotFound | Self::MethodNotAllowed => self.to_string(),
        }
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Flatten field errors into one sorted, `; `-separated line
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        } else {
            debug!(error = %self, code = self.error_code(), "Request rejected");
        }

        (status, Json(Envelope::failure(self.client_message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful envelope (200) with a message and data
pub struct Reply<T> {
    message: &'static str,
    data: T,
}

impl<T> Reply<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        Json(Envelope::success(self.message, self.data)).into_response()
    }
}

/// Created response (201) wrapping another response
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
