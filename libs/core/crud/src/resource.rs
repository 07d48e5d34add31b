use chrono::{DateTime, FixedOffset};
use sea_orm::{FromQueryResult, Value};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use utoipa::ToSchema;
use utoipa::openapi::schema::{KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::RefOr;
use uuid::Uuid;

/// Identifier type of a resource table.
pub trait StoreKey:
    Clone + Debug + Display + PartialEq + Send + Sync + DeserializeOwned + Into<Value> + 'static
{
    /// Key for the `seq`-th row of an in-memory store (1-based).
    fn generate(seq: i64) -> Self;

    /// OpenAPI schema of the `{id}` path parameter.
    fn schema() -> RefOr<Schema>;
}

impl StoreKey for i32 {
    fn generate(seq: i64) -> Self {
        i32::try_from(seq).unwrap_or(i32::MAX)
    }

    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32)))
                .build(),
        ))
    }
}

impl StoreKey for Uuid {
    fn generate(_seq: i64) -> Self {
        Uuid::new_v4()
    }

    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)))
                .build(),
        ))
    }
}

/// Error trace codes returned to clients, one per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceCodes {
    pub create: &'static str,
    pub get_one: &'static str,
    pub get_all: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// A table exposed through the generic CRUD stack.
///
/// `COLUMNS` is the full select list (id first, then data columns, then
/// `created_at` / `updated_at`). `insert_values` and `patch_values` return data
/// columns only; the repository appends the timestamps.
pub trait Resource: Send + Sync + 'static {
    type Id: StoreKey;
    /// Stored row, also the JSON representation.
    type Record: Serialize + FromQueryResult + ToSchema + Clone + Debug + Send + Sync + 'static;
    /// `POST` body.
    type Create: DeserializeOwned + ToSchema + Debug + Send + 'static;
    /// `PATCH` body.
    type Update: DeserializeOwned + ToSchema + Debug + Send + 'static;
    /// Validated insert produced by the policy.
    type New: Clone + Debug + Send + Sync + 'static;
    /// Validated change set produced by the policy; fields left `None` keep their value.
    type Changes: Clone + Debug + Send + Sync + 'static;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Singular name used in messages, e.g. `"category"`.
    const NAME: &'static str;
    /// JSON key of the list payload, e.g. `"categories"`.
    const PLURAL: &'static str;
    const TAG: &'static str;
    const TRACE: TraceCodes;

    fn id(record: &Self::Record) -> Self::Id;

    fn insert_values(new: &Self::New) -> Vec<(&'static str, Value)>;

    fn patch_values(changes: &Self::Changes) -> Vec<(&'static str, Value)>;

    /// Builds the row an insert would return; used by the in-memory store.
    fn hydrate(id: Self::Id, new: Self::New, at: DateTime<FixedOffset>) -> Self::Record;

    /// Applies a change set in place; used by the in-memory store.
    fn apply(record: &mut Self::Record, changes: Self::Changes, at: DateTime<FixedOffset>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_keys_follow_sequence() {
        assert_eq!(i32::generate(1), 1);
        assert_eq!(i32::generate(42), 42);
        assert_eq!(i32::generate(i64::MAX), i32::MAX);
    }

    #[test]
    fn test_uuid_keys_are_unique() {
        assert_ne!(Uuid::generate(1), Uuid::generate(1));
    }
}
