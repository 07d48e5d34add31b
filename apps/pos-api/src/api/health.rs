//! Readiness probe with a real database check.

use axum::extract::State;
use axum::response::Response;
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// `200 {"status":"ready","database":"connected"}`, or `503` with
/// `"database":"disconnected"` when `SELECT 1` fails.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
