use chrono::{DateTime, FixedOffset};
use core_crud::{Resource, TraceCodes};
use sea_orm::Value;

use crate::models::{CreateOrder, NewOrder, Order, OrderChanges, UpdateOrder};

/// `orders` table; `products` is JSONB.
pub struct Orders;

impl Resource for Orders {
    type Id = i32;
    type Record = Order;
    type Create = CreateOrder;
    type Update = UpdateOrder;
    type New = NewOrder;
    type Changes = OrderChanges;

    const TABLE: &'static str = "orders";
    const ID_COLUMN: &'static str = "order_id";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "cashier_id",
        "payment_id",
        "total_price",
        "total_paid",
        "total_return",
        "receipt_id",
        "is_download",
        "products",
        "created_at",
        "updated_at",
    ];
    const NAME: &'static str = "order";
    const PLURAL: &'static str = "orders";
    const TAG: &'static str = "orders";
    const TRACE: TraceCodes = TraceCodes {
        create: "order-001",
        get_one: "order-002",
        get_all: "order-003",
        update: "order-004",
        delete: "order-005",
    };

    fn id(record: &Order) -> i32 {
        record.order_id
    }

    fn insert_values(new: &NewOrder) -> Vec<(&'static str, Value)> {
        vec![
            ("cashier_id", new.cashier_id.into()),
            ("payment_id", new.payment_id.into()),
            ("total_price", new.total_price.into()),
            ("total_paid", new.total_paid.into()),
            ("total_return", new.total_return.into()),
            ("receipt_id", new.receipt_id.clone().into()),
            ("is_download", new.is_download.into()),
            ("products", new.snapshot.clone().into()),
        ]
    }

    fn patch_values(changes: &OrderChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(is_download) = changes.is_download {
            values.push(("is_download", is_download.into()));
        }
        values
    }

    fn hydrate(id: i32, new: NewOrder, at: DateTime<FixedOffset>) -> Order {
        Order {
            order_id: id,
            cashier_id: new.cashier_id,
            payment_id: new.payment_id,
            total_price: new.total_price,
            total_paid: new.total_paid,
            total_return: new.total_return,
            receipt_id: new.receipt_id,
            is_download: new.is_download,
            products: new.products,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Order, changes: OrderChanges, at: DateTime<FixedOffset>) {
        if let Some(is_download) = changes.is_download {
            record.is_download = is_download;
        }
        record.updated_at = at;
    }
}
