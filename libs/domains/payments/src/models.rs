use chrono::{DateTime, FixedOffset};
use core_crud::Patch;
use sea_orm::{DbErr, FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i32,
    pub name: String,
    /// Payment type name, e.g. `CASH`
    #[serde(rename = "type")]
    pub kind: String,
    pub payment_type_id: i32,
    pub logo: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

// Written by hand because the `type` column cannot be a field name.
impl FromQueryResult for Payment {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            payment_id: res.try_get(pre, "payment_id")?,
            name: res.try_get(pre, "name")?,
            kind: res.try_get(pre, "type")?,
            payment_type_id: res.try_get(pre, "payment_type_id")?,
            logo: res.try_get(pre, "logo")?,
            created_at: res.try_get(pre, "created_at")?,
            updated_at: res.try_get(pre, "updated_at")?,
        })
    }
}

/// Row of the seeded `payment_types` table.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PaymentType {
    pub payment_type_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePayment {
    #[serde(default)]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub name: String,
    /// Payment type name; must exist in `payment_types`
    #[serde(default, rename = "type")]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub kind: String,
    pub logo: Option<String>,
}

/// A new `type` is resolved again; `"logo": null` clears the logo.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePayment {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub logo: Patch<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub name: String,
    pub kind: String,
    pub payment_type_id: i32,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentChanges {
    pub name: Option<String>,
    /// Type name and its resolved id always change together
    pub kind: Option<(String, i32)>,
    pub logo: Option<Option<String>>,
}
