use axum::Router;
use core_crud::CrudRepository;
use utoipa::openapi::OpenApi;

use crate::entity::Cashiers;
use crate::service::CashierService;

/// `GET|POST /`, `GET|PATCH|DELETE /{id}`; nest under `/cashiers`.
pub fn router<S: CrudRepository<Cashiers> + 'static>(service: CashierService<S>) -> Router {
    core_crud::router(service)
}

pub fn openapi() -> OpenApi {
    core_crud::docs::openapi::<Cashiers>()
}
