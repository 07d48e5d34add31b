//! Tri-state field for partial updates.
//!
//! | JSON            | `Patch<T>`     | meaning               |
//! |-----------------|----------------|-----------------------|
//! | field absent    | `Unset`        | keep stored value     |
//! | `"field": null` | `Null`         | clear (nullable only) |
//! | `"field": v`    | `Value(v)`     | overwrite             |
//!
//! Request structs must put `#[serde(default)]` on every `Patch` field so an
//! absent key becomes `Unset`.

use serde::{Deserialize, Deserializer};

use crate::policy::PolicyError;

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Change for a nullable column: `None` keeps, `Some(None)` clears.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Unset => None,
            Patch::Null => Some(None),
            Patch::Value(value) => Some(Some(value)),
        }
    }

    /// Change for a `NOT NULL` column; explicit null is rejected.
    pub fn non_null(self, field: &str) -> Result<Option<T>, PolicyError> {
        match self {
            Patch::Unset => Ok(None),
            Patch::Null => Err(PolicyError::Invalid(format!("{} cannot be null", field))),
            Patch::Value(value) => Ok(Some(value)),
        }
    }
}

impl Patch<String> {
    /// Change for required text: blank keeps the stored value, like absent.
    pub fn required_text(self, field: &str) -> Result<Option<String>, PolicyError> {
        Ok(self
            .non_null(field)?
            .filter(|value| !value.trim().is_empty()))
    }
}
