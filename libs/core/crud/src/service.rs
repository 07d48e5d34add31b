use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::clock::Clock;
use crate::error::{CrudError, CrudResult, StoreError};
use crate::policy::{Policy, PolicyError};
use crate::repository::CrudRepository;
use crate::resource::Resource;

/// Page size used when `limit` is absent or zero.
pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination query of every list endpoint.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page size; absent or 0 means 10
    pub limit: Option<u64>,
    /// Number of rows to skip
    pub skip: Option<u64>,
}

impl PageQuery {
    /// `(limit, skip)` with defaults applied.
    pub fn resolve(&self) -> (u64, u64) {
        let limit = match self.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit,
        };
        (limit, self.skip.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    /// Row count of the whole table
    pub total: u64,
    pub limit: u64,
    pub skip: u64,
}

/// One page of records, serialized as `{"<plural>": [...], "meta": {...}}`.
pub struct Listing<R: Resource> {
    pub items: Vec<R::Record>,
    pub meta: PageMeta,
}

impl<R: Resource> Serialize for Listing<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(R::PLURAL, &self.items)?;
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}

impl<R: Resource> fmt::Debug for Listing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field(R::PLURAL, &self.items)
            .field("meta", &self.meta)
            .finish()
    }
}

/// Service layer shared by all resources: runs the policy, stamps timestamps,
/// applies pagination defaults and maps store failures to [`CrudError`].
pub struct CrudService<R, S, P> {
    repository: Arc<S>,
    policy: Arc<P>,
    clock: Clock,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S, P> Clone for CrudService<R, S, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: Arc::clone(&self.policy),
            clock: self.clock,
            _resource: PhantomData,
        }
    }
}

impl<R, S, P> CrudService<R, S, P>
where
    R: Resource,
    S: CrudRepository<R>,
    P: Policy<R>,
{
    pub fn new(repository: S, policy: P, clock: Clock) -> Self {
        Self {
            repository: Arc::new(repository),
            policy: Arc::new(policy),
            clock,
            _resource: PhantomData,
        }
    }

    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn create(&self, input: R::Create) -> CrudResult<R::Record> {
        let trace_id = R::TRACE.create;

        let new = self
            .policy
            .prepare_create(input)
            .await
            .map_err(|e| policy_failure::<R>(trace_id, e))?;

        self.repository
            .create(new, self.clock.now())
            .await
            .map_err(|e| store_failure::<R>(trace_id, e))
    }

    #[instrument(skip_all, fields(resource = R::NAME, %id))]
    pub async fn get_one(&self, id: R::Id) -> CrudResult<R::Record> {
        self.repository
            .get_one(id)
            .await
            .map_err(|e| store_failure::<R>(R::TRACE.get_one, e))
    }

    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn get_all(&self, query: PageQuery) -> CrudResult<Listing<R>> {
        let (limit, skip) = query.resolve();

        let (items, total) = self
            .repository
            .get_all(limit, skip)
            .await
            .map_err(|e| store_failure::<R>(R::TRACE.get_all, e))?;

        Ok(Listing {
            items,
            meta: PageMeta { total, limit, skip },
        })
    }

    #[instrument(skip_all, fields(resource = R::NAME, %id))]
    pub async fn update(&self, id: R::Id, input: R::Update) -> CrudResult<R::Record> {
        let trace_id = R::TRACE.update;

        let changes = self
            .policy
            .prepare_update(input)
            .await
            .map_err(|e| policy_failure::<R>(trace_id, e))?;

        self.repository
            .update(id, changes, self.clock.now())
            .await
            .map_err(|e| store_failure::<R>(trace_id, e))
    }

    #[instrument(skip_all, fields(resource = R::NAME, %id))]
    pub async fn delete(&self, id: R::Id) -> CrudResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| store_failure::<R>(R::TRACE.delete, e))
    }
}

fn policy_failure<R: Resource>(trace_id: &'static str, error: PolicyError) -> CrudError {
    match error {
        PolicyError::Invalid(message) => CrudError::Invalid { trace_id, message },
        PolicyError::Store(error) => store_failure::<R>(trace_id, error),
    }
}

fn store_failure<R: Resource>(trace_id: &'static str, error: StoreError) -> CrudError {
    match error {
        StoreError::NotFound => CrudError::NotFound {
            trace_id,
            message: format!("{} id not found", R::NAME),
        },
        source => {
            tracing::error!(trace_id, error = %source, "Store call failed");
            CrudError::Internal { trace_id, source }
        }
    }
}
