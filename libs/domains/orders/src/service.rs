use async_trait::async_trait;
use core_crud::{Clock, CrudService, PgRepository, Policy, PolicyError, StoreError};
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::entity::Orders;
use crate::lookup::OrderLookup;
use crate::models::{CreateOrder, NewOrder, OrderChanges, OrderLine, UpdateOrder};
use crate::postgres::PgOrderLookup;

pub type OrderService<S, L> = CrudService<Orders, S, OrderPolicy<L>>;

/// Service backed by PostgreSQL for both orders and the lookups.
pub fn pg_service(
    db: DatabaseConnection,
    timeout: Duration,
    clock: Clock,
) -> OrderService<PgRepository<Orders>, PgOrderLookup> {
    let lookup = PgOrderLookup::new(db.clone(), timeout);
    CrudService::new(PgRepository::new(db, timeout), OrderPolicy::new(lookup), clock)
}

/// Checks references, prices every line and settles the totals.
pub struct OrderPolicy<L> {
    lookup: Arc<L>,
}

impl<L: OrderLookup> OrderPolicy<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    async fn price_lines(&self, input: &CreateOrder) -> Result<Vec<OrderLine>, PolicyError> {
        let mut lines = Vec::with_capacity(input.products.len());

        for request in &input.products {
            let product = self
                .lookup
                .find_product(request.product_id)
                .await?
                .ok_or_else(|| invalid(format!("product {} does not exist", request.product_id)))?;

            lines.push(OrderLine {
                product_id: product.product_id,
                name: product.name,
                price: product.price,
                quantity: request.quantity,
                total_price: money(product.price * f64::from(request.quantity)),
            });
        }

        Ok(lines)
    }
}

#[async_trait]
impl<L: OrderLookup> Policy<Orders> for OrderPolicy<L> {
    async fn prepare_create(&self, input: CreateOrder) -> Result<NewOrder, PolicyError> {
        input.validate()?;

        if !self.lookup.cashier_exists(input.cashier_id).await? {
            return Err(invalid(format!("cashier {} does not exist", input.cashier_id)));
        }
        if !self.lookup.payment_exists(input.payment_id).await? {
            return Err(invalid(format!("payment {} does not exist", input.payment_id)));
        }

        let products = self.price_lines(&input).await?;
        let total_price = money(products.iter().map(|line| line.total_price).sum());

        if input.total_paid < total_price {
            tracing::info!(total_price, total_paid = input.total_paid, "Order underpaid");
            return Err(invalid(format!(
                "totalPaid {} is less than totalPrice {}",
                input.total_paid, total_price
            )));
        }

        let snapshot = serde_json::to_value(&products)
            .map_err(|e| StoreError::from(DbErr::Json(format!("orders.products: {}", e))))?;

        Ok(NewOrder {
            cashier_id: input.cashier_id,
            payment_id: input.payment_id,
            total_price,
            total_paid: input.total_paid,
            total_return: money(input.total_paid - total_price),
            receipt_id: Uuid::now_v7().to_string(),
            is_download: false,
            products,
            snapshot,
        })
    }

    async fn prepare_update(&self, input: UpdateOrder) -> Result<OrderChanges, PolicyError> {
        Ok(OrderChanges {
            is_download: input.is_download.non_null("isDownload")?,
        })
    }
}

fn invalid(message: String) -> PolicyError {
    PolicyError::Invalid(message)
}

/// Rounds to cents.
fn money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MockOrderLookup;
    use crate::models::{LineRequest, ProductSnapshot};
    use core_crud::Patch;
    use mockall::predicate::eq;

    fn tea() -> ProductSnapshot {
        ProductSnapshot {
            product_id: Uuid::from_u128(1),
            name: "Iced tea".to_string(),
            price: 25.5,
        }
    }

    fn cake() -> ProductSnapshot {
        ProductSnapshot {
            product_id: Uuid::from_u128(2),
            name: "Cheesecake".to_string(),
            price: 0.1,
        }
    }

    fn lookup() -> MockOrderLookup {
        let mut lookup = MockOrderLookup::new();
        lookup.expect_cashier_exists().returning(|_| Ok(true));
        lookup.expect_payment_exists().returning(|_| Ok(true));
        lookup
            .expect_find_product()
            .returning(|id| Ok([tea(), cake()].into_iter().find(|p| p.product_id == id)));
        lookup
    }

    fn order(total_paid: f64, lines: &[(u128, i32)]) -> CreateOrder {
        CreateOrder {
            cashier_id: 1,
            payment_id: 1,
            total_paid,
            products: lines
                .iter()
                .map(|(id, quantity)| LineRequest {
                    product_id: Uuid::from_u128(*id),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_totals_are_computed_from_current_prices() {
        let new = OrderPolicy::new(lookup())
            .prepare_create(order(100.0, &[(1, 2), (2, 3)]))
            .await
            .unwrap();

        assert_eq!(new.products.len(), 2);
        assert_eq!(new.products[0].name, "Iced tea");
        assert_eq!(new.products[0].total_price, 51.0);
        assert_eq!(new.products[1].total_price, 0.3);
        assert_eq!(new.total_price, 51.3);
        assert_eq!(new.total_return, 48.7);
        assert!(!new.is_download);
        assert_eq!(new.snapshot[1]["productId"], Uuid::from_u128(2).to_string());
        assert_eq!(new.snapshot[1]["quantity"], 3);
        assert_eq!(Uuid::parse_str(&new.receipt_id).unwrap().get_version_num(), 7);
    }

    #[tokio::test]
    async fn test_exact_payment_has_no_return() {
        let new = OrderPolicy::new(lookup())
            .prepare_create(order(51.0, &[(1, 2)]))
            .await
            .unwrap();

        assert_eq!(new.total_return, 0.0);
    }

    #[tokio::test]
    async fn test_underpayment_is_invalid() {
        let err = OrderPolicy::new(lookup())
            .prepare_create(order(50.0, &[(1, 2)]))
            .await
            .unwrap_err();

        assert!(matches!(err, PolicyError::Invalid(msg) if msg == "totalPaid 50 is less than totalPrice 51"));
    }

    #[tokio::test]
    async fn test_lines_are_validated_before_lookups() {
        let mut lookup = MockOrderLookup::new();
        lookup.expect_cashier_exists().never();
        let policy = OrderPolicy::new(lookup);

        let err = policy.prepare_create(order(10.0, &[])).await.unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(msg) if msg == "products must contain at least one line"));

        let err = policy
            .prepare_create(order(10.0, &[(1, 1), (1, 0)]))
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(msg) if msg == "products[1].quantity must be greater than 0"));
    }

    #[tokio::test]
    async fn test_unknown_references_are_invalid() {
        let mut missing_cashier = MockOrderLookup::new();
        missing_cashier
            .expect_cashier_exists()
            .with(eq(9))
            .returning(|_| Ok(false));
        let mut input = order(100.0, &[(1, 1)]);
        input.cashier_id = 9;

        let err = OrderPolicy::new(missing_cashier)
            .prepare_create(input)
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(msg) if msg == "cashier 9 does not exist"));

        let err = OrderPolicy::new(lookup())
            .prepare_create(order(100.0, &[(1, 1), (3, 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(msg) if msg.starts_with("product 00000000-0000-0000-0000-000000000003")));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_store_error() {
        let mut lookup = MockOrderLookup::new();
        lookup
            .expect_cashier_exists()
            .returning(|_| Err(StoreError::Timeout(Duration::from_secs(10))));

        let err = OrderPolicy::new(lookup)
            .prepare_create(order(100.0, &[(1, 1)]))
            .await
            .unwrap_err();

        assert!(matches!(err, PolicyError::Store(StoreError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_update_changes_download_flag_only() {
        let policy = OrderPolicy::new(MockOrderLookup::new());

        let changes = policy
            .prepare_update(UpdateOrder {
                is_download: Patch::Value(true),
            })
            .await
            .unwrap();
        assert_eq!(changes.is_download, Some(true));

        let err = policy
            .prepare_update(UpdateOrder {
                is_download: Patch::Null,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(msg) if msg == "isDownload cannot be null"));
    }
}
