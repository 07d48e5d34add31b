use axum::Router;
use domain_payments::{handlers, service};

use crate::state::AppState;

/// Payment types are looked up in the same pool as payments.
pub fn router(state: &AppState) -> Router {
    let service = service::pg_service(state.db.clone(), state.config.api.store_timeout, state.clock());
    handlers::router(service)
}
