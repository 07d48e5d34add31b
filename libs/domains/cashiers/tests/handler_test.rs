//! Handler tests for the Cashiers domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_crud::{Clock, CrudService, InMemoryRepository};
use domain_cashiers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = CrudService::new(
        InMemoryRepository::<Cashiers>::new(),
        CashierPolicy,
        Clock::default(),
    );
    Router::new().nest("/cashiers", handlers::router(service))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_create_hides_passcode() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/cashiers",
        Some(json!({ "name": "Somchai", "passcode": "123456" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["cashierId"], 1);
    assert_eq!(body["data"]["name"], "Somchai");
    assert!(body["data"].get("passcode").is_none());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_requires_name_and_passcode() {
    let app = app();

    let (status, body) = send(&app, "POST", "/cashiers", Some(json!({ "name": "Somchai" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["trace_id"], "cashier-001");
    assert_eq!(body["error"]["message"], "passcode is required");
}

#[tokio::test]
async fn test_list_and_detail_use_cashier_trace_codes() {
    let app = app();

    let (status, body) = send(&app, "GET", "/cashiers?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["trace_id"], "cashier-002");

    let (status, body) = send(&app, "GET", "/cashiers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["trace_id"], "cashier-003");
    assert_eq!(body["error"]["message"], "cashier id not found");
}

#[tokio::test]
async fn test_list_defaults_to_ten() {
    let app = app();
    for i in 0..12 {
        send(
            &app,
            "POST",
            "/cashiers",
            Some(json!({ "name": format!("cashier {}", i), "passcode": "000000" })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/cashiers?limit=0&skip=0", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cashiers"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["meta"], json!({ "total": 12, "limit": 10, "skip": 0 }));
}

#[tokio::test]
async fn test_patch_renames_and_keeps_passcode() {
    let app = app();
    send(
        &app,
        "POST",
        "/cashiers",
        Some(json!({ "name": "Somchai", "passcode": "123456" })),
    )
    .await;

    let (status, body) = send(&app, "PATCH", "/cashiers/1", Some(json!({ "name": "Somsak" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Somsak");
}
