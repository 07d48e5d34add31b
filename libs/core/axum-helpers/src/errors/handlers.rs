use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Fallback for unmatched routes: a 404 in the standard error envelope.
pub async fn not_found() -> Response {
    AppError::not_found(
        ErrorCode::NotFound.as_str(),
        "The requested route was not found",
    )
    .into_response()
}
