//! Shared application state.

use core_crud::Clock;
use database::postgres::DatabaseConnection;

use crate::config::Config;

/// Cloned into every router; the connection is a handle to the one pool
/// opened at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        Self { config, db }
    }

    /// Stamps `created_at` / `updated_at` in the configured offset.
    pub fn clock(&self) -> Clock {
        Clock::new(self.config.api.utc_offset)
    }
}
