use axum::Router;
use core_crud::CrudRepository;
use utoipa::openapi::OpenApi;

use crate::entity::Payments;
use crate::repository::PaymentTypeRepository;
use crate::service::PaymentService;

/// `GET|POST /`, `GET|PATCH|DELETE /{id}`; nest under `/payments`.
pub fn router<S, T>(service: PaymentService<S, T>) -> Router
where
    S: CrudRepository<Payments> + 'static,
    T: PaymentTypeRepository + 'static,
{
    core_crud::router(service)
}

pub fn openapi() -> OpenApi {
    core_crud::docs::openapi::<Payments>()
}
