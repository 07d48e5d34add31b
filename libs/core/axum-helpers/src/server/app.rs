use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::openapi::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the application router.
///
/// - API routes nested under `/api`
/// - OpenAPI document at `/api-docs/openapi.json`, browsable through Swagger UI,
///   ReDoc, RapiDoc and Scalar
/// - request tracing, security headers, CORS and response compression
/// - JSON 404 fallback for unmatched routes
///
/// Routers passed in must already have their state applied.
///
/// # Errors
/// Returns `InvalidInput` when one of `cors_origins` is not a valid header value.
pub fn create_router(apis: Router, openapi: OpenApi, cors_origins: &[String]) -> io::Result<Router> {
    let cors = cors_layer(cors_origins).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;

    if cors_origins.is_empty() {
        info!("CORS allows any origin");
    } else {
        info!("CORS configured with allowed origins: {}", cors_origins.join(","));
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", openapi))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Strips a trailing slash before routing, so `/api/v1/categories/` and
/// `/api/v1/categories` reach the same handler.
///
/// Has to wrap the finished router: a layer added with `Router::layer` runs
/// after the route was already matched.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` bounded by `shutdown_timeout`.
///
/// In-flight requests are drained before the cleanup future (closing the
/// database pool, typically) is awaited.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_task = tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let app = axum::ServiceExt::<axum::extract::Request>::into_make_service(normalize_paths(router));

    let serve_result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    signal_task.abort();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use utoipa::openapi::OpenApiBuilder;

    fn app() -> Router {
        let apis = Router::new().route("/v1/ping", get(|| async { "pong" }));
        create_router(apis, OpenApiBuilder::new().build(), &[]).unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_api() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v1/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["trace_id"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_the_same_route() {
        for uri in ["/api/v1/ping", "/api/v1/ping/"] {
            let response = normalize_paths(app())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[test]
    fn test_invalid_cors_origin_fails() {
        let result = create_router(
            Router::new(),
            OpenApiBuilder::new().build(),
            &["bad\norigin".to_string()],
        );
        assert!(result.is_err());
    }
}
