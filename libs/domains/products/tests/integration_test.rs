//! Integration tests for the Products domain

use chrono::Utc;
use core_crud::{CrudRepository, PgRepository};
use domain_products::*;
use std::time::Duration;
use test_utils::{TestDataBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_store_generates_uuid_and_patches_columns() {
    let db = TestDatabase::new().await;
    let repo = PgRepository::<Products>::new(db.connection(), Duration::from_secs(10));
    let builder = TestDataBuilder::from_test_name("products_uuid");
    let now = Utc::now().fixed_offset();

    let created = repo
        .create(
            NewProduct {
                name: builder.name("product", "tea"),
                desc: Some("jasmine".to_string()),
                price: builder.price(),
                discount: 0,
                stock: 1,
                category_id: None,
            },
            now,
        )
        .await
        .unwrap();
    assert!(!created.product_id.is_nil());

    let updated = repo
        .update(
            created.product_id,
            ProductChanges {
                stock: Some(0),
                desc: Some(None),
                ..ProductChanges::default()
            },
            now,
        )
        .await
        .unwrap();

    assert_eq!(updated.stock, 0);
    assert!(updated.desc.is_none());
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.name, created.name);

    let fetched = repo.get_one(created.product_id).await.unwrap();
    assert_eq!(fetched, updated);
}
