use axum::Router;
use domain_products::{handlers, service};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = service::pg_service(state.db.clone(), state.config.api.store_timeout, state.clock());
    handlers::router(service)
}
