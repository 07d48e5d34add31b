use async_trait::async_trait;
use core_crud::{StoreResult, with_timeout};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement, Value};
use std::time::Duration;
use uuid::Uuid;

use crate::lookup::OrderLookup;
use crate::models::ProductSnapshot;

#[derive(Debug, FromQueryResult)]
struct ExistsRow {
    found: bool,
}

/// PostgreSQL implementation of OrderLookup
#[derive(Clone)]
pub struct PgOrderLookup {
    db: DatabaseConnection,
    timeout: Duration,
}

impl PgOrderLookup {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn exists(&self, sql: &str, id: Value) -> StoreResult<bool> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id]);
        let row = with_timeout(self.timeout, ExistsRow::find_by_statement(stmt).one(&self.db)).await?;
        Ok(row.is_some_and(|row| row.found))
    }
}

#[async_trait]
impl OrderLookup for PgOrderLookup {
    async fn cashier_exists(&self, cashier_id: i32) -> StoreResult<bool> {
        self.exists(
            r#"SELECT EXISTS (SELECT 1 FROM "cashiers" WHERE "cashier_id" = $1) AS "found""#,
            cashier_id.into(),
        )
        .await
    }

    async fn payment_exists(&self, payment_id: i32) -> StoreResult<bool> {
        self.exists(
            r#"SELECT EXISTS (SELECT 1 FROM "payments" WHERE "payment_id" = $1) AS "found""#,
            payment_id.into(),
        )
        .await
    }

    async fn find_product(&self, product_id: Uuid) -> StoreResult<Option<ProductSnapshot>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT "product_id", "name", "price" FROM "products" WHERE "product_id" = $1"#,
            [product_id.into()],
        );

        with_timeout(self.timeout, ProductSnapshot::find_by_statement(stmt).one(&self.db)).await
    }
}
