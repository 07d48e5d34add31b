use async_trait::async_trait;
use core_crud::{Clock, CrudService, PgRepository, Policy, PolicyError};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use validator::Validate;

use crate::entity::Cashiers;
use crate::models::{CashierChanges, CreateCashier, NewCashier, UpdateCashier};

pub type CashierService<S> = CrudService<Cashiers, S, CashierPolicy>;

/// Service backed by PostgreSQL.
pub fn pg_service(
    db: DatabaseConnection,
    timeout: Duration,
    clock: Clock,
) -> CashierService<PgRepository<Cashiers>> {
    CrudService::new(PgRepository::new(db, timeout), CashierPolicy, clock)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CashierPolicy;

#[async_trait]
impl Policy<Cashiers> for CashierPolicy {
    async fn prepare_create(&self, input: CreateCashier) -> Result<NewCashier, PolicyError> {
        input.validate()?;

        Ok(NewCashier {
            name: input.name,
            passcode: input.passcode,
        })
    }

    async fn prepare_update(&self, input: UpdateCashier) -> Result<CashierChanges, PolicyError> {
        Ok(CashierChanges {
            name: input.name.required_text("name")?,
            passcode: input.passcode.required_text("passcode")?,
        })
    }
}
