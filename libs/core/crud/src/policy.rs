use async_trait::async_trait;
use std::borrow::Cow;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::error::StoreError;
use crate::resource::Resource;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Flattens field errors into `"<path> <message>"` clauses, e.g.
/// `"products[0].quantity must be greater than 0"`, sorted by path.
impl From<ValidationErrors> for PolicyError {
    fn from(errors: ValidationErrors) -> Self {
        let mut clauses = Vec::new();
        flatten("", &errors, &mut clauses);
        clauses.sort();
        PolicyError::Invalid(clauses.join("; "))
    }
}

fn flatten(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("is invalid ({})", error.code)));
                    out.push(format!("{} {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

/// Resource-specific rules applied before any write reaches the repository:
/// required fields, defaults and foreign-key lookups.
#[async_trait]
pub trait Policy<R: Resource>: Send + Sync {
    async fn prepare_create(&self, input: R::Create) -> Result<R::New, PolicyError>;

    async fn prepare_update(&self, input: R::Update) -> Result<R::Changes, PolicyError>;
}
