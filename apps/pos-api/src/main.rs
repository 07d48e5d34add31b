use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use database::postgres::{close, connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Time allowed for draining requests and closing the pool after a signal.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // One pool for the whole process, opened once
    let db = connect_from_config_with_retry(config.database.clone(), RetryConfig::default())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Create-if-absent schema and payment type seed
    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let state = AppState::new(config, db);

    let api_routes = api::routes(&state);
    let docs = openapi::document(&state.config.app, &state.config.api);

    // create_router adds docs/middleware to our composed routes
    let router = create_router(api_routes, docs, &state.config.server.cors_allowed_origins)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the database
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting {} v{} under /api{}",
        state.config.app.name,
        state.config.app.version,
        state.config.api.prefix()
    );

    let AppState { config, db } = state;

    create_production_app(app, &config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");
        if let Err(e) = close(db).await {
            tracing::error!("Error closing PostgreSQL: {}", e);
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("POS API shutdown complete");
    Ok(())
}
