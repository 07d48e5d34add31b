//! Orders Domain
//!
//! Receipts taken at the till. An order is priced from the current product
//! rows and stores its lines as a JSONB snapshot, so later product edits do
//! not rewrite history. After creation only `isDownload` may change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← core_crud::router + OpenAPI document
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌─────────────┐
//! │   Service   │ ───▶ │ OrderLookup │  ← cashier / payment / product rows
//! └──────┬──────┘      └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgRepository<Orders> / InMemoryRepository<Orders>
//! └─────────────┘
//! ```

pub mod entity;
pub mod handlers;
pub mod lookup;
pub mod models;
pub mod postgres;
pub mod service;

pub use entity::Orders;
pub use lookup::{InMemoryOrderLookup, OrderLookup};
pub use models::{
    CreateOrder, LineRequest, NewOrder, Order, OrderChanges, OrderLine, ProductSnapshot,
    UpdateOrder,
};
pub use postgres::PgOrderLookup;
pub use service::{OrderPolicy, OrderService};
