pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": {
///     "trace_id": "category-002",
///     "message": "category id not found"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Body of [`ErrorResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Resource + operation code for support correlation, e.g. `payment-001`
    pub trace_id: String,
    /// Human-readable message, never a raw driver error
    pub message: String,
}

impl ErrorResponse {
    pub fn new(trace_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                trace_id: trace_id.into(),
                message: message.into(),
            },
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it owns the status mapping and the
/// single log line written for each failed request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request [{trace_id}]: {message}")]
    BadRequest { trace_id: String, message: String },

    #[error("Not Found [{trace_id}]: {message}")]
    NotFound { trace_id: String, message: String },

    #[error("Internal Server Error [{trace_id}]: {message}")]
    InternalServerError { trace_id: String, message: String },

    #[error("Service Unavailable [{trace_id}]: {message}")]
    ServiceUnavailable { trace_id: String, message: String },
}

impl AppError {
    pub fn bad_request(trace_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            trace_id: trace_id.into(),
            message: message.into(),
        }
    }

    pub fn not_found(trace_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            trace_id: trace_id.into(),
            message: message.into(),
        }
    }

    pub fn internal(trace_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InternalServerError {
            trace_id: trace_id.into(),
            message: message.into(),
        }
    }

    pub fn unavailable(trace_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            trace_id: trace_id.into(),
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (trace_id, message) = match self {
            AppError::BadRequest { trace_id, message } => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    %trace_id,
                    "Bad request: {}",
                    message
                );
                (trace_id, message)
            }
            AppError::NotFound { trace_id, message } => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    %trace_id,
                    "Not found: {}",
                    message
                );
                (trace_id, message)
            }
            AppError::InternalServerError { trace_id, message } => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    %trace_id,
                    "Internal server error: {}",
                    message
                );
                (trace_id, message)
            }
            AppError::ServiceUnavailable { trace_id, message } => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    %trace_id,
                    "Service unavailable: {}",
                    message
                );
                (trace_id, message)
            }
        };

        (status, Json(ErrorResponse::new(trace_id, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_renders_envelope() {
        let (status, body) = render(AppError::bad_request("cashier-001", "name is required")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["trace_id"], "cashier-001");
        assert_eq!(body["error"]["message"], "name is required");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, _) = render(AppError::not_found("category-002", "category id not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = render(AppError::internal("payment-003", "internal server error")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["trace_id"], "payment-003");

        let (status, _) = render(AppError::unavailable("SERVICE_UNAVAILABLE", "draining")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
