use async_trait::async_trait;
use core_crud::{Clock, CrudService, Patch, PgRepository, Policy, PolicyError};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use validator::Validate;

use crate::entity::Products;
use crate::models::{CreateProduct, DEFAULT_STOCK, NewProduct, ProductChanges, UpdateProduct};

pub type ProductService<S> = CrudService<Products, S, ProductPolicy>;

/// Service backed by PostgreSQL.
pub fn pg_service(
    db: DatabaseConnection,
    timeout: Duration,
    clock: Clock,
) -> ProductService<PgRepository<Products>> {
    CrudService::new(PgRepository::new(db, timeout), ProductPolicy, clock)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPolicy;

#[async_trait]
impl Policy<Products> for ProductPolicy {
    async fn prepare_create(&self, input: CreateProduct) -> Result<NewProduct, PolicyError> {
        input.validate()?;

        let stock = match input.stock {
            None | Some(0) => DEFAULT_STOCK,
            Some(stock) => stock,
        };

        Ok(NewProduct {
            name: input.name,
            desc: input.desc,
            price: input.price,
            discount: input.discount.unwrap_or(0),
            stock,
            category_id: input.category_id,
        })
    }

    async fn prepare_update(&self, input: UpdateProduct) -> Result<ProductChanges, PolicyError> {
        Ok(ProductChanges {
            name: input.name.required_text("name")?,
            desc: input.desc.into_change(),
            price: price_change(input.price)?,
            discount: count_change(input.discount, "discount")?,
            stock: count_change(input.stock, "stock")?,
            category_id: input.category_id.into_change(),
        })
    }
}

/// `0` keeps the stored price: a product is never free.
fn price_change(price: Patch<f64>) -> Result<Option<f64>, PolicyError> {
    match price.non_null("price")? {
        Some(price) if price < 0.0 => Err(PolicyError::Invalid(
            "price must be greater than 0".to_string(),
        )),
        Some(price) if price == 0.0 => Ok(None),
        price => Ok(price),
    }
}

fn count_change(value: Patch<i32>, field: &str) -> Result<Option<i32>, PolicyError> {
    match value.non_null(field)? {
        Some(value) if value < 0 => Err(PolicyError::Invalid(format!("{} cannot be negative", field))),
        value => Ok(value),
    }
}
