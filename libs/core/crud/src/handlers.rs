use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Response,
    routing::get,
};
use axum_helpers::{Envelope, no_content};
use std::sync::Arc;

use crate::error::{CrudError, CrudResult};
use crate::policy::Policy;
use crate::repository::CrudRepository;
use crate::resource::Resource;
use crate::service::{CrudService, PageQuery};

type SharedService<R, S, P> = Arc<CrudService<R, S, P>>;

/// Router with the five CRUD endpoints of one resource, to be nested under its
/// plural path (`/categories`, ...).
///
/// | Method | Path    | Success              |
/// |--------|---------|----------------------|
/// | GET    | `/`     | 200 `{data: listing}` |
/// | POST   | `/`     | 201 `{data: record}`  |
/// | GET    | `/{id}` | 200 `{data: record}`  |
/// | PATCH  | `/{id}` | 200 `{data: record}`  |
/// | DELETE | `/{id}` | 204                   |
pub fn router<R, S, P>(service: CrudService<R, S, P>) -> Router
where
    R: Resource,
    S: CrudRepository<R> + 'static,
    P: Policy<R> + 'static,
{
    Router::new()
        .route("/", get(list::<R, S, P>).post(create::<R, S, P>))
        .route(
            "/{id}",
            get(get_one::<R, S, P>)
                .patch(update::<R, S, P>)
                .delete(delete::<R, S, P>),
        )
        .with_state(Arc::new(service))
}

async fn list<R, S, P>(
    State(service): State<SharedService<R, S, P>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> CrudResult<Response>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    let Query(query) = query.map_err(|e| CrudError::invalid(R::TRACE.get_all, e.body_text()))?;
    let listing = service.get_all(query).await?;
    Ok(Envelope::ok(listing))
}

async fn create<R, S, P>(
    State(service): State<SharedService<R, S, P>>,
    body: Result<Json<R::Create>, JsonRejection>,
) -> CrudResult<Response>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    let Json(input) = body.map_err(|e| CrudError::invalid(R::TRACE.create, e.body_text()))?;
    let record = service.create(input).await?;
    Ok(Envelope::created(record))
}

async fn get_one<R, S, P>(
    State(service): State<SharedService<R, S, P>>,
    id: Result<Path<R::Id>, PathRejection>,
) -> CrudResult<Response>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    let Path(id) = id.map_err(|e| CrudError::invalid(R::TRACE.get_one, e.body_text()))?;
    let record = service.get_one(id).await?;
    Ok(Envelope::ok(record))
}

async fn update<R, S, P>(
    State(service): State<SharedService<R, S, P>>,
    id: Result<Path<R::Id>, PathRejection>,
    body: Result<Json<R::Update>, JsonRejection>,
) -> CrudResult<Response>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    let Path(id) = id.map_err(|e| CrudError::invalid(R::TRACE.update, e.body_text()))?;
    let Json(input) = body.map_err(|e| CrudError::invalid(R::TRACE.update, e.body_text()))?;
    let record = service.update(id, input).await?;
    Ok(Envelope::ok(record))
}

async fn delete<R, S, P>(
    State(service): State<SharedService<R, S, P>>,
    id: Result<Path<R::Id>, PathRejection>,
) -> CrudResult<Response>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    let Path(id) = id.map_err(|e| CrudError::invalid(R::TRACE.delete, e.body_text()))?;
    service.delete(id).await?;
    Ok(no_content())
}
