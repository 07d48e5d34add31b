//! Point-of-sale schema. Every table is created only if absent, so running
//! the migrator against an existing database is a no-op.

pub use sea_orm_migration::prelude::*;

mod m20250301_000000_bootstrap;
mod m20250301_000001_create_cashiers;
mod m20250301_000002_create_categories;
mod m20250301_000003_create_payment_types;
mod m20250301_000004_seed_payment_types;
mod m20250301_000005_create_payments;
mod m20250301_000006_create_products;
mod m20250301_000007_create_discounts;
mod m20250301_000008_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_bootstrap::Migration),
            Box::new(m20250301_000001_create_cashiers::Migration),
            Box::new(m20250301_000002_create_categories::Migration),
            Box::new(m20250301_000003_create_payment_types::Migration),
            Box::new(m20250301_000004_seed_payment_types::Migration),
            Box::new(m20250301_000005_create_payments::Migration),
            Box::new(m20250301_000006_create_products::Migration),
            Box::new(m20250301_000007_create_discounts::Migration),
            Box::new(m20250301_000008_create_orders::Migration),
        ]
    }
}
