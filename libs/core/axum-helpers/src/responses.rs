//! Success envelope shared by every resource endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// `{"data": ...}` wrapper around a successful payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> Envelope<T> {
    /// `200 OK` with the envelope as body.
    pub fn ok(data: T) -> Response {
        (StatusCode::OK, Json(Self::new(data))).into_response()
    }

    /// `201 Created` with the envelope as body.
    pub fn created(data: T) -> Response {
        (StatusCode::CREATED, Json(Self::new(data))).into_response()
    }
}

/// `204 No Content` with an empty body.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_created_wraps_payload_in_data() {
        let response = Envelope::created(json!({ "categoryId": 1 }));
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "data": { "categoryId": 1 } }));
    }

    #[tokio::test]
    async fn test_no_content_has_empty_body() {
        let response = no_content();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
