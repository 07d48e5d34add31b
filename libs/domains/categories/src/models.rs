use chrono::{DateTime, FixedOffset};
use core_crud::Patch;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    pub title: String,
    pub desc: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[serde(default)]
    #[validate(custom(function = "core_crud::rules::not_blank"))]
    pub title: String,
    pub desc: Option<String>,
}

/// Absent or blank `title` keeps the stored title; `"desc": null` clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategory {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub desc: Patch<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub title: String,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChanges {
    pub title: Option<String>,
    pub desc: Option<Option<String>>,
}
