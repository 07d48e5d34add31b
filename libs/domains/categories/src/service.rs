use async_trait::async_trait;
use core_crud::{Clock, CrudService, PgRepository, Policy, PolicyError};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use validator::Validate;

use crate::entity::Categories;
use crate::models::{CategoryChanges, CreateCategory, NewCategory, UpdateCategory};

pub type CategoryService<S> = CrudService<Categories, S, CategoryPolicy>;

/// Service backed by PostgreSQL.
pub fn pg_service(
    db: DatabaseConnection,
    timeout: Duration,
    clock: Clock,
) -> CategoryService<PgRepository<Categories>> {
    CrudService::new(PgRepository::new(db, timeout), CategoryPolicy, clock)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPolicy;

#[async_trait]
impl Policy<Categories> for CategoryPolicy {
    async fn prepare_create(&self, input: CreateCategory) -> Result<NewCategory, PolicyError> {
        input.validate()?;

        Ok(NewCategory {
            title: input.title,
            desc: input.desc,
        })
    }

    async fn prepare_update(&self, input: UpdateCategory) -> Result<CategoryChanges, PolicyError> {
        Ok(CategoryChanges {
            title: input.title.required_text("title")?,
            desc: input.desc.into_change(),
        })
    }
}
