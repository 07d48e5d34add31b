use axum::Router;
use core_crud::CrudRepository;
use utoipa::openapi::OpenApi;

use crate::entity::Orders;
use crate::lookup::OrderLookup;
use crate::service::OrderService;

/// `GET|POST /`, `GET|PATCH|DELETE /{id}`; nest under `/orders`.
pub fn router<S, L>(service: OrderService<S, L>) -> Router
where
    S: CrudRepository<Orders> + 'static,
    L: OrderLookup + 'static,
{
    core_crud::router(service)
}

pub fn openapi() -> OpenApi {
    core_crud::docs::openapi::<Orders>()
}
