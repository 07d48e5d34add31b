//! Cashiers Domain
//!
//! Till operators identified by `name` and a write-only `passcode`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← core_crud::router + OpenAPI document
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← CashierPolicy: name and passcode required
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgRepository<Cashiers> / InMemoryRepository<Cashiers>
//! └─────────────┘
//! ```
//!
//! The passcode is stored but never serialized into a response.

pub mod entity;
pub mod handlers;
pub mod models;
pub mod service;

pub use entity::Cashiers;
pub use models::{Cashier, CashierChanges, CreateCashier, NewCashier, UpdateCashier};
pub use service::{CashierPolicy, CashierService};
