//! Products Domain
//!
//! Sellable items with price, discount and stock, optionally filed under a
//! category. Product ids are UUIDs generated by the store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← core_crud::router + OpenAPI document
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← ProductPolicy: price > 0, stock defaults to 1
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgRepository<Products> / InMemoryRepository<Products>
//! └─────────────┘
//! ```

pub mod entity;
pub mod handlers;
pub mod models;
pub mod service;

pub use entity::Products;
pub use models::{CreateProduct, NewProduct, Product, ProductChanges, UpdateProduct};
pub use service::{ProductPolicy, ProductService};
