use async_trait::async_trait;
use core_crud::StoreResult;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::models::PaymentType;

/// Payment types seeded by the migrations, with their fixed ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SeededPaymentType {
    Cash = 1,
    Transfer = 2,
    Etc = 3,
}

impl SeededPaymentType {
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn row(self) -> PaymentType {
        PaymentType {
            payment_type_id: self.id(),
            name: self.to_string(),
        }
    }
}

/// Lookup of `payment_types` by name (exact match).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentTypeRepository: Send + Sync {
    async fn find_type_by_name(&self, name: &str) -> StoreResult<Option<PaymentType>>;
}

/// In-memory implementation (for development/testing).
#[derive(Debug, Clone)]
pub struct InMemoryPaymentTypeRepository {
    types: Vec<PaymentType>,
}

impl InMemoryPaymentTypeRepository {
    /// Holds the same rows as a freshly migrated database.
    pub fn seeded() -> Self {
        Self {
            types: SeededPaymentType::iter().map(SeededPaymentType::row).collect(),
        }
    }
}

impl Default for InMemoryPaymentTypeRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PaymentTypeRepository for InMemoryPaymentTypeRepository {
    async fn find_type_by_name(&self, name: &str) -> StoreResult<Option<PaymentType>> {
        Ok(self.types.iter().find(|t| t.name == name).cloned())
    }
}
