//! Payments Domain
//!
//! Payment methods offered at the till. Each payment names a payment type
//! (`CASH`, `TRANSFER`, `ETC`) that is resolved to `payment_types.payment_type_id`
//! whenever it is written.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← core_crud::router + OpenAPI document
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌───────────────────────┐
//! │   Service   │ ───▶ │ PaymentTypeRepository │  ← find_type_by_name
//! └──────┬──────┘      └───────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgRepository<Payments> / InMemoryRepository<Payments>
//! └─────────────┘
//! ```

pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use entity::Payments;
pub use models::{CreatePayment, NewPayment, Payment, PaymentChanges, PaymentType, UpdatePayment};
pub use postgres::PgPaymentTypeRepository;
pub use repository::{InMemoryPaymentTypeRepository, PaymentTypeRepository, SeededPaymentType};
pub use service::{PaymentPolicy, PaymentService};
