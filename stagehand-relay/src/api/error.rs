//! API Error Handling
//!
//! Unified error types and conversion for API responses.
//!
//! Every failure class maps to its own status code so callers can tell a
//! local validation problem from a rejected credential, an upstream failure,
//! or a run that outlived the polling budget.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::DriveError;
use stagehand_client::ClientError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request was malformed before any network call was made
    BadRequest(String),
    /// The platform rejected the supplied credential
    Unauthorized(String),
    /// The run outlived the polling budget
    UpstreamTimeout(String),
    /// Any other platform-side failure
    Upstream(String),
    /// Relay-side failure
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::UpstreamTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        if err.is_auth() {
            ApiError::Unauthorized("Invalid API key".to_string())
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}

impl From<DriveError> for ApiError {
    fn from(err: DriveError) -> Self {
        match err {
            DriveError::TimedOut { .. } => ApiError::UpstreamTimeout("Run timed out".to_string()),
            DriveError::Start(e) | DriveError::Poll(e) => e.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
