//! Categories Domain
//!
//! Product categories: a required `title` and an optional `desc`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← core_crud::router + OpenAPI document
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← CategoryPolicy: required title, tri-state desc
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgRepository<Categories> / InMemoryRepository<Categories>
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_categories::{handlers, service};
//!
//! let service = service::pg_service(db, store_timeout, clock);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod handlers;
pub mod models;
pub mod service;

pub use entity::Categories;
pub use models::{Category, CategoryChanges, CreateCategory, NewCategory, UpdateCategory};
pub use service::{CategoryPolicy, CategoryService};
