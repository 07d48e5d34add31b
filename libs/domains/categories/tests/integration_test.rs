//! Integration tests for the Categories domain
//!
//! Run the generated SQL against a real PostgreSQL via testcontainers:
//! `cargo test -p domain_categories -- --ignored`

use chrono::Utc;
use core_crud::{CrudRepository, PgRepository, StoreError};
use domain_categories::*;
use std::time::Duration;
use test_utils::{TestDataBuilder, TestDatabase};

fn repository(db: &TestDatabase) -> PgRepository<Categories> {
    PgRepository::new(db.connection(), Duration::from_secs(10))
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_update_delete_round() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);
    let builder = TestDataBuilder::from_test_name("categories_round");
    let now = Utc::now().fixed_offset();

    let created = repo
        .create(
            NewCategory {
                title: builder.name("category", "drinks"),
                desc: Some("cold drinks".to_string()),
            },
            now,
        )
        .await
        .unwrap();
    assert!(created.category_id > 0);

    let updated = repo
        .update(
            created.category_id,
            CategoryChanges {
                title: None,
                desc: Some(Some("Beverages".to_string())),
            },
            now,
        )
        .await
        .unwrap();
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.desc.as_deref(), Some("Beverages"));

    repo.delete(created.category_id).await.unwrap();
    assert!(matches!(
        repo.get_one(created.category_id).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        repo.delete(created.category_id).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_total_ignores_pagination() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);
    let now = Utc::now().fixed_offset();

    for i in 0..5 {
        repo.create(
            NewCategory {
                title: format!("category {}", i),
                desc: None,
            },
            now,
        )
        .await
        .unwrap();
    }

    let (page, total) = repo.get_all(2, 4).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 1);

    let (page, total) = repo.get_all(10, 10).await.unwrap();
    assert_eq!(total, 5);
    assert!(page.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_null_desc_clears_column() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);
    let now = Utc::now().fixed_offset();

    let created = repo
        .create(
            NewCategory {
                title: "Drinks".to_string(),
                desc: Some("cold drinks".to_string()),
            },
            now,
        )
        .await
        .unwrap();

    let updated = repo
        .update(
            created.category_id,
            CategoryChanges {
                title: None,
                desc: Some(None),
            },
            now,
        )
        .await
        .unwrap();

    assert!(updated.desc.is_none());
    assert_eq!(updated.title, "Drinks");
}
