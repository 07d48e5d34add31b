use async_trait::async_trait;
use core_crud::{Clock, CrudService, PgRepository, Policy, PolicyError};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::entity::Payments;
use crate::models::{CreatePayment, NewPayment, PaymentChanges, UpdatePayment};
use crate::postgres::PgPaymentTypeRepository;
use crate::repository::PaymentTypeRepository;

pub type PaymentService<S, T> = CrudService<Payments, S, PaymentPolicy<T>>;

/// Service backed by PostgreSQL for both payments and the type lookup.
pub fn pg_service(
    db: DatabaseConnection,
    timeout: Duration,
    clock: Clock,
) -> PaymentService<PgRepository<Payments>, PgPaymentTypeRepository> {
    let types = PgPaymentTypeRepository::new(db.clone(), timeout);
    CrudService::new(PgRepository::new(db, timeout), PaymentPolicy::new(types), clock)
}

/// Resolves the payment type name on every write.
pub struct PaymentPolicy<T> {
    types: Arc<T>,
}

impl<T: PaymentTypeRepository> PaymentPolicy<T> {
    pub fn new(types: T) -> Self {
        Self {
            types: Arc::new(types),
        }
    }

    async fn resolve(&self, kind: &str) -> Result<i32, PolicyError> {
        match self.types.find_type_by_name(kind).await? {
            Some(found) => Ok(found.payment_type_id),
            None => {
                tracing::info!(payment_type = kind, "Unknown payment type");
                Err(PolicyError::Invalid(format!("unknown payment type \"{}\"", kind)))
            }
        }
    }
}

#[async_trait]
impl<T: PaymentTypeRepository> Policy<Payments> for PaymentPolicy<T> {
    async fn prepare_create(&self, input: CreatePayment) -> Result<NewPayment, PolicyError> {
        input.validate()?;

        let payment_type_id = self.resolve(&input.kind).await?;

        Ok(NewPayment {
            name: input.name,
            kind: input.kind,
            payment_type_id,
            logo: input.logo,
        })
    }

    async fn prepare_update(&self, input: UpdatePayment) -> Result<PaymentChanges, PolicyError> {
        let name = input.name.required_text("name")?;
        let logo = input.logo.into_change();

        let kind = match input.kind.required_text("type")? {
            Some(kind) => {
                let payment_type_id = self.resolve(&kind).await?;
                Some((kind, payment_type_id))
            }
            None => None,
        };

        Ok(PaymentChanges { name, kind, logo })
    }
}
