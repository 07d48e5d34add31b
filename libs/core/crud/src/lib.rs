//! Generic CRUD component shared by every POS resource.
//!
//! A resource plugs in by implementing [`Resource`] (table mapping, JSON types,
//! trace codes) and [`Policy`] (validation, defaults and lookups). Everything
//! else is generic:
//!
//! ```text
//! ┌──────────────────┐
//! │ handlers::router │  ← bind JSON / path / query, {"data": ...} envelope
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │   CrudService    │  ← Policy, timestamps, pagination defaults, error mapping
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  CrudRepository  │  ← PgRepository (parameterized SQL) / InMemoryRepository
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_crud::{Clock, CrudService, PgRepository, handlers};
//!
//! let repository = PgRepository::<Categories>::new(db, Duration::from_secs(10));
//! let service = CrudService::new(repository, CategoryPolicy, Clock::new(offset));
//! let router = handlers::router(service);
//! ```

pub mod clock;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod patch;
pub mod policy;
pub mod repository;
pub mod resource;
pub mod rules;
pub mod service;
pub mod sql;

#[cfg(test)]
mod fixtures;

pub use clock::Clock;
pub use error::{CrudError, CrudResult, StoreError, StoreResult};
pub use handlers::router;
pub use patch::Patch;
pub use policy::{Policy, PolicyError};
pub use repository::{CrudRepository, InMemoryRepository, PgRepository, with_timeout};
pub use resource::{Resource, StoreKey, TraceCodes};
pub use service::{CrudService, Listing, PageMeta, PageQuery};
