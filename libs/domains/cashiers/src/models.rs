use chrono::{DateTime, FixedOffset};
use core_crud::Patch;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub cashier_id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub passcode: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCashier {
    #[serde(default)]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub passcode: String,
}

/// Absent or blank fields keep the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCashier {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub passcode: Patch<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCashier {
    pub name: String,
    pub passcode: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashierChanges {
    pub name: Option<String>,
    pub passcode: Option<String>,
}
