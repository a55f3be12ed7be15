//! Error responses.

use api_shared::ErrorRes;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use triage_core::CoreError;

/// JSON request body whose rejections are reported as [`ApiError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, "request failed: {}", self);
        } else {
            tracing::warn!(status = %status, "request rejected: {}", self);
        }

        let message = match &self {
            ApiError::Internal(_) => "Internal error".to_string(),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
        };
        (self.status(), Json(ErrorRes { message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_) | CoreError::Types(_) | CoreError::Uuid(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CoreError::ConversationNotFound(_) => ApiError::NotFound(err.to_string()),
            CoreError::StoreUnavailable => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<triage_core::TypesError> for ApiError {
    fn from(err: triage_core::TypesError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<triage_core::UuidError> for ApiError {
    fn from(err: triage_core::UuidError) -> Self {
        CoreError::from(err).into()
    }
}
