//! # Axum Helpers
//!
//! Shared HTTP plumbing for the POS API.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{"error": {"trace_id", "message"}}` envelope
//! - **[`responses`]**: `{"data": ...}` success envelope
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router(api_routes, openapi, &config.server.cors_allowed_origins)?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod http;
pub mod responses;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorDetail, ErrorResponse};
pub use http::{cors_layer, security_headers};
pub use responses::{Envelope, no_content};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, normalize_paths, run_health_checks,
};
