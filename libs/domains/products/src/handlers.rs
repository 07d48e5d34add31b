use axum::Router;
use core_crud::CrudRepository;
use utoipa::openapi::OpenApi;

use crate::entity::Products;
use crate::service::ProductService;

/// `GET|POST /`, `GET|PATCH|DELETE /{id}` with UUID ids; nest under `/products`.
pub fn router<S: CrudRepository<Products> + 'static>(service: ProductService<S>) -> Router {
    core_crud::router(service)
}

pub fn openapi() -> OpenApi {
    core_crud::docs::openapi::<Products>()
}
