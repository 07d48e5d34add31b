use async_trait::async_trait;
use core_crud::{StoreResult, with_timeout};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use std::time::Duration;

use crate::models::PaymentType;
use crate::repository::PaymentTypeRepository;

/// PostgreSQL implementation of PaymentTypeRepository
#[derive(Clone)]
pub struct PgPaymentTypeRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl PgPaymentTypeRepository {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

#[async_trait]
impl PaymentTypeRepository for PgPaymentTypeRepository {
    async fn find_type_by_name(&self, name: &str) -> StoreResult<Option<PaymentType>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT "payment_type_id", "name" FROM "payment_types" WHERE "name" = $1"#,
            [name.into()],
        );

        with_timeout(self.timeout, PaymentType::find_by_statement(stmt).one(&self.db)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{MockDatabase, Value};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_lookup_maps_row() {
        let row = BTreeMap::from([
            ("payment_type_id", Value::from(2)),
            ("name", Value::from("TRANSFER")),
        ]);
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let repo = PgPaymentTypeRepository::new(db, Duration::from_secs(1));

        let found = repo.find_type_by_name("TRANSFER").await.unwrap();

        assert_eq!(
            found,
            Some(PaymentType {
                payment_type_id: 2,
                name: "TRANSFER".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_lookup_without_row_is_none() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let repo = PgPaymentTypeRepository::new(db, Duration::from_secs(1));

        assert_eq!(repo.find_type_by_name("CRYPTO").await.unwrap(), None);
    }
}
