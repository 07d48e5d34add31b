use axum::Router;
use core_crud::CrudRepository;
use utoipa::openapi::OpenApi;

use crate::entity::Categories;
use crate::service::CategoryService;

/// `GET|POST /`, `GET|PATCH|DELETE /{id}`; nest under `/categories`.
pub fn router<S: CrudRepository<Categories> + 'static>(service: CategoryService<S>) -> Router {
    core_crud::router(service)
}

/// OpenAPI document with paths relative to the router's mount point.
pub fn openapi() -> OpenApi {
    core_crud::docs::openapi::<Categories>()
}
