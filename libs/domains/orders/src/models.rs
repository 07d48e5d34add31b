use chrono::{DateTime, FixedOffset};
use core_crud::Patch;
use sea_orm::{DbErr, FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i32,
    pub cashier_id: i32,
    pub payment_id: i32,
    pub total_price: f64,
    pub total_paid: f64,
    pub total_return: f64,
    pub receipt_id: String,
    pub is_download: bool,
    pub products: Vec<OrderLine>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

// `products` is a JSONB column holding the line snapshot.
impl FromQueryResult for Order {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        let products: serde_json::Value = res.try_get(pre, "products")?;
        let products = serde_json::from_value(products)
            .map_err(|e| DbErr::Json(format!("orders.products: {}", e)))?;

        Ok(Self {
            order_id: res.try_get(pre, "order_id")?,
            cashier_id: res.try_get(pre, "cashier_id")?,
            payment_id: res.try_get(pre, "payment_id")?,
            total_price: res.try_get(pre, "total_price")?,
            total_paid: res.try_get(pre, "total_paid")?,
            total_return: res.try_get(pre, "total_return")?,
            receipt_id: res.try_get(pre, "receipt_id")?,
            is_download: res.try_get(pre, "is_download")?,
            products,
            created_at: res.try_get(pre, "created_at")?,
            updated_at: res.try_get(pre, "updated_at")?,
        })
    }
}

/// One priced line of an order, copied from the product at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub total_price: f64,
}

/// Product columns an order line is priced from.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ProductSnapshot {
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub cashier_id: i32,
    pub payment_id: i32,
    /// Amount handed over; must cover the total price
    pub total_paid: f64,
    #[serde(default)]
    #[validate(length(min = 1, message = "must contain at least one line"), nested)]
    pub products: Vec<LineRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub quantity: i32,
}

/// Only `isDownload` is writable after creation.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateOrder {
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_download: Patch<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub cashier_id: i32,
    pub payment_id: i32,
    pub total_price: f64,
    pub total_paid: f64,
    pub total_return: f64,
    pub receipt_id: String,
    pub is_download: bool,
    pub products: Vec<OrderLine>,
    /// `products` as written to the JSONB column.
    pub snapshot: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderChanges {
    pub is_download: Option<bool>,
}
