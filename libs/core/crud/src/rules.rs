//! Custom `validator` rules shared by the resource request bodies.

use std::borrow::Cow;
use validator::ValidationError;

/// Rejects empty and whitespace-only text.
///
/// ```ignore
/// #[validate(custom(function = "core_crud::rules::not_blank"))]
/// pub name: String,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("is required")));
    }
    Ok(())
}
