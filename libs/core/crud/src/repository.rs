use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement, Value};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::resource::{Resource, StoreKey};
use crate::sql;

/// Data access for one resource table.
///
/// `get_all` returns the page and the total row count of the table, which is
/// independent of `limit` / `skip`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrudRepository<R: Resource>: Send + Sync {
    async fn create(&self, new: R::New, at: DateTime<FixedOffset>) -> StoreResult<R::Record>;

    async fn get_one(&self, id: R::Id) -> StoreResult<R::Record>;

    async fn get_all(&self, limit: u64, skip: u64) -> StoreResult<(Vec<R::Record>, u64)>;

    async fn update(
        &self,
        id: R::Id,
        changes: R::Changes,
        at: DateTime<FixedOffset>,
    ) -> StoreResult<R::Record>;

    async fn delete(&self, id: R::Id) -> StoreResult<()>;
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    total: i64,
}

/// PostgreSQL implementation using raw parameterized statements.
///
/// Every call is bounded by `timeout`; a call that exceeds it fails with
/// [`StoreError::Timeout`] and the in-flight query is dropped.
pub struct PgRepository<R> {
    db: DatabaseConnection,
    timeout: Duration,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for PgRepository<R> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            timeout: self.timeout,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> PgRepository<R> {
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self {
            db,
            timeout,
            _resource: PhantomData,
        }
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T, DbErr>>) -> StoreResult<T> {
        with_timeout(self.timeout, call).await
    }

    async fn fetch_one(&self, stmt: Statement) -> StoreResult<Option<R::Record>> {
        self.bounded(<R::Record as FromQueryResult>::find_by_statement(stmt).one(&self.db))
            .await
    }
}

/// Runs one store call, failing with [`StoreError::Timeout`] once `timeout`
/// elapses. Dropping the returned future cancels the call.
pub async fn with_timeout<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, DbErr>>,
) -> StoreResult<T> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(timeout)),
    }
}

fn with_timestamps(
    mut values: Vec<(&'static str, Value)>,
    columns: &[&'static str],
    at: DateTime<FixedOffset>,
) -> Vec<(&'static str, Value)> {
    for column in columns {
        values.push((*column, at.into()));
    }
    values
}

#[async_trait]
impl<R: Resource> CrudRepository<R> for PgRepository<R> {
    async fn create(&self, new: R::New, at: DateTime<FixedOffset>) -> StoreResult<R::Record> {
        let values = with_timestamps(R::insert_values(&new), &["created_at", "updated_at"], at);
        let stmt = sql::insert(R::TABLE, R::COLUMNS, values);

        let record = self
            .fetch_one(stmt)
            .await?
            .ok_or_else(|| StoreError::Database(DbErr::RecordNotInserted))?;

        tracing::info!(resource = R::NAME, id = %R::id(&record), "Created record");
        Ok(record)
    }

    async fn get_one(&self, id: R::Id) -> StoreResult<R::Record> {
        let stmt = sql::select_one(R::TABLE, R::COLUMNS, R::ID_COLUMN, id.into());
        self.fetch_one(stmt).await?.ok_or(StoreError::NotFound)
    }

    async fn get_all(&self, limit: u64, skip: u64) -> StoreResult<(Vec<R::Record>, u64)> {
        let page = sql::select_page(R::TABLE, R::COLUMNS, R::ID_COLUMN, limit, skip);
        let records = self
            .bounded(<R::Record as FromQueryResult>::find_by_statement(page).all(&self.db))
            .await?;

        let total = self
            .bounded(CountRow::find_by_statement(sql::count(R::TABLE)).one(&self.db))
            .await?
            .map(|row| u64::try_from(row.total).unwrap_or_default())
            .unwrap_or_default();

        Ok((records, total))
    }

    async fn update(
        &self,
        id: R::Id,
        changes: R::Changes,
        at: DateTime<FixedOffset>,
    ) -> StoreResult<R::Record> {
        let values = with_timestamps(R::patch_values(&changes), &["updated_at"], at);
        let stmt = sql::update(R::TABLE, R::COLUMNS, R::ID_COLUMN, id.clone().into(), values);

        let record = self.fetch_one(stmt).await?.ok_or(StoreError::NotFound)?;

        tracing::info!(resource = R::NAME, %id, "Updated record");
        Ok(record)
    }

    async fn delete(&self, id: R::Id) -> StoreResult<()> {
        let stmt = sql::delete(R::TABLE, R::ID_COLUMN, id.clone().into());
        let result = self.bounded(self.db.execute_raw(stmt)).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::info!(resource = R::NAME, %id, "Deleted record");
        Ok(())
    }
}

/// In-memory implementation (for development/testing).
pub struct InMemoryRepository<R: Resource> {
    records: Arc<RwLock<Vec<R::Record>>>,
    sequence: Arc<AtomicI64>,
}

impl<R: Resource> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            sequence: Arc::clone(&self.sequence),
        }
    }
}

impl<R: Resource> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Resource> CrudRepository<R> for InMemoryRepository<R> {
    async fn create(&self, new: R::New, at: DateTime<FixedOffset>) -> StoreResult<R::Record> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let record = R::hydrate(R::Id::generate(seq), new, at);

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_one(&self, id: R::Id) -> StoreResult<R::Record> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| R::id(record) == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self, limit: u64, skip: u64) -> StoreResult<(Vec<R::Record>, u64)> {
        let records = self.records.read().await;
        let page = records
            .iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((page, records.len() as u64))
    }

    async fn update(
        &self,
        id: R::Id,
        changes: R::Changes,
        at: DateTime<FixedOffset>,
    ) -> StoreResult<R::Record> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| R::id(record) == id)
            .ok_or(StoreError::NotFound)?;

        R::apply(record, changes, at);
        Ok(record.clone())
    }

    async fn delete(&self, id: R::Id) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| R::id(record) == id)
            .ok_or(StoreError::NotFound)?;

        records.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{NewNote, NoteChanges, Notes, at};

    fn new_note(title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_in_memory_assigns_sequential_ids() {
        let repo = InMemoryRepository::<Notes>::new();

        let first = repo.create(new_note("a"), at()).await.unwrap();
        let second = repo.create(new_note("b"), at()).await.unwrap();

        assert_eq!(first.note_id, 1);
        assert_eq!(second.note_id, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_in_memory_total_ignores_page() {
        let repo = InMemoryRepository::<Notes>::new();
        for i in 0..5 {
            repo.create(new_note(&format!("note {}", i)), at()).await.unwrap();
        }

        let (page, total) = repo.get_all(2, 3).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].note_id, 4);

        let (page, total) = repo.get_all(10, 50).await.unwrap();
        assert_eq!(total, 5);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_update_keeps_unchanged_fields() {
        let repo = InMemoryRepository::<Notes>::new();
        let created = repo
            .create(
                NewNote {
                    title: "Drinks".to_string(),
                    body: Some("cold drinks".to_string()),
                },
                at(),
            )
            .await
            .unwrap();

        let updated = repo
            .update(
                created.note_id,
                NoteChanges {
                    title: None,
                    body: Some(Some("Beverages".to_string())),
                },
                at(),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Drinks");
        assert_eq!(updated.body.as_deref(), Some("Beverages"));
    }

    #[tokio::test]
    async fn test_in_memory_missing_rows_are_not_found() {
        let repo = InMemoryRepository::<Notes>::new();

        assert!(matches!(repo.get_one(9).await, Err(StoreError::NotFound)));
        assert!(matches!(repo.delete(9).await, Err(StoreError::NotFound)));
        assert!(matches!(
            repo.update(9, NoteChanges::default(), at()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_call_times_out() {
        let stalled = std::future::pending::<Result<(), DbErr>>();

        let result = with_timeout(Duration::from_secs(10), stalled).await;

        assert!(matches!(result, Err(StoreError::Timeout(d)) if d == Duration::from_secs(10)));
    }

    #[tokio::test]
    async fn test_in_memory_delete_removes_record() {
        let repo = InMemoryRepository::<Notes>::new();
        let created = repo.create(new_note("a"), at()).await.unwrap();

        repo.delete(created.note_id).await.unwrap();

        assert!(repo.is_empty().await);
    }

    mod postgres {
        use super::*;
        use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
        use std::collections::BTreeMap;

        type Row = BTreeMap<&'static str, Value>;

        fn note_row(id: i32) -> Row {
            BTreeMap::from([
                ("note_id", Value::from(id)),
                ("title", Value::from(format!("note {}", id))),
                ("body", Value::from(None::<String>)),
                ("created_at", Value::from(at())),
                ("updated_at", Value::from(at())),
            ])
        }

        fn repo(db: MockDatabase) -> PgRepository<Notes> {
            PgRepository::new(db.into_connection(), Duration::from_secs(1))
        }

        #[tokio::test]
        async fn test_total_comes_from_count_row() {
            let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
                vec![note_row(4)],
                vec![BTreeMap::from([("total", Value::from(5i64))])],
            ]);

            let (page, total) = repo(db).get_all(1, 3).await.unwrap();

            assert_eq!(page.len(), 1);
            assert_eq!(page[0].note_id, 4);
            assert_eq!(total, 5);
        }

        #[tokio::test]
        async fn test_empty_page_still_reports_total() {
            let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
                Vec::<Row>::new(),
                vec![BTreeMap::from([("total", Value::from(2i64))])],
            ]);

            let (page, total) = repo(db).get_all(10, 50).await.unwrap();

            assert!(page.is_empty());
            assert_eq!(total, 2);
        }

        #[tokio::test]
        async fn test_create_returns_inserted_row() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![note_row(1)]]);

            let note = repo(db).create(new_note("note 1"), at()).await.unwrap();

            assert_eq!(note.note_id, 1);
            assert_eq!(note.created_at, at());
        }

        #[tokio::test]
        async fn test_create_without_returned_row_fails() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<Row>::new()]);

            let result = repo(db).create(new_note("a"), at()).await;

            assert!(matches!(
                result,
                Err(StoreError::Database(DbErr::RecordNotInserted))
            ));
        }

        #[tokio::test]
        async fn test_missing_rows_are_not_found() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<Row>::new(), Vec::<Row>::new()]);
            let repo = repo(db);

            assert!(matches!(repo.get_one(9).await, Err(StoreError::NotFound)));
            assert!(matches!(
                repo.update(9, NoteChanges::default(), at()).await,
                Err(StoreError::NotFound)
            ));
        }

        #[tokio::test]
        async fn test_delete_of_no_rows_is_not_found() {
            let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ]);
            let repo = repo(db);

            assert!(matches!(repo.delete(9).await, Err(StoreError::NotFound)));
            assert!(repo.delete(1).await.is_ok());
        }

        #[tokio::test]
        async fn test_driver_error_is_database_error() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection reset".to_string())]);

            let result = repo(db).get_one(1).await;

            assert!(matches!(result, Err(StoreError::Database(DbErr::Custom(_)))));
        }
    }
}
