//! PostgreSQL connectivity for the POS API.
//!
//! # Features
//!
//! - `postgres` (default) - connection pool, migrations runner and health check via SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::{RetryConfig, postgres};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(config, RetryConfig::default()).await?;
//! postgres::run_migrations::<Migrator>(&db, "pos_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};
