use axum::Router;
use domain_orders::{handlers, service};

use crate::state::AppState;

/// Cashier, payment and product lookups share the pool with orders.
pub fn router(state: &AppState) -> Router {
    let service = service::pg_service(state.db.clone(), state.config.api.store_timeout, state.clock());
    handlers::router(service)
}
