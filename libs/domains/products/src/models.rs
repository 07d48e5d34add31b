use chrono::{DateTime, FixedOffset};
use core_crud::Patch;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Stock assigned when a product is created without one (or with 0).
pub const DEFAULT_STOCK: i32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    pub desc: Option<String>,
    pub price: f64,
    pub discount: i32,
    pub stock: i32,
    /// Category reference, stored as given
    pub category_id: Option<i32>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub name: String,
    pub desc: Option<String>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub discount: Option<i32>,
    /// Absent or 0 means 1
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
}

/// - `name`: absent or blank keeps
/// - `price`: absent or 0 keeps
/// - `stock` / `discount`: any non-negative value is written, including 0
/// - `desc` / `categoryId`: `null` clears
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub desc: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Patch<f64>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub discount: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub stock: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub category_id: Patch<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub desc: Option<String>,
    pub price: f64,
    pub discount: i32,
    pub stock: i32,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub desc: Option<Option<String>>,
    pub price: Option<f64>,
    pub discount: Option<i32>,
    pub stock: Option<i32>,
    pub category_id: Option<Option<i32>>,
}
