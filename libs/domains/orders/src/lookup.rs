use async_trait::async_trait;
use core_crud::StoreResult;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::ProductSnapshot;

/// Rows an order is checked and priced against.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderLookup: Send + Sync {
    async fn cashier_exists(&self, cashier_id: i32) -> StoreResult<bool>;

    async fn payment_exists(&self, payment_id: i32) -> StoreResult<bool>;

    async fn find_product(&self, product_id: Uuid) -> StoreResult<Option<ProductSnapshot>>;
}

/// In-memory implementation (for development/testing).
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderLookup {
    cashiers: HashSet<i32>,
    payments: HashSet<i32>,
    products: Vec<ProductSnapshot>,
}

impl InMemoryOrderLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cashier(mut self, cashier_id: i32) -> Self {
        self.cashiers.insert(cashier_id);
        self
    }

    pub fn with_payment(mut self, payment_id: i32) -> Self {
        self.payments.insert(payment_id);
        self
    }

    pub fn with_product(mut self, product_id: Uuid, name: &str, price: f64) -> Self {
        self.products.push(ProductSnapshot {
            product_id,
            name: name.to_string(),
            price,
        });
        self
    }
}

#[async_trait]
impl OrderLookup for InMemoryOrderLookup {
    async fn cashier_exists(&self, cashier_id: i32) -> StoreResult<bool> {
        Ok(self.cashiers.contains(&cashier_id))
    }

    async fn payment_exists(&self, payment_id: i32) -> StoreResult<bool> {
        Ok(self.payments.contains(&payment_id))
    }

    async fn find_product(&self, product_id: Uuid) -> StoreResult<Option<ProductSnapshot>> {
        Ok(self
            .products
            .iter()
            .find(|product| product.product_id == product_id)
            .cloned())
    }
}
