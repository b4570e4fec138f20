//! Validation utilities.

use crate::{FieldError, QuillError};
use validator::{Validate, ValidationError, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `QuillError` on failure.
    fn validate_request(&self) -> Result<(), QuillError> {
        self.validate().map_err(validation_errors_to_quill_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `QuillError`.
#[must_use]
pub fn validation_errors_to_quill_error(errors: ValidationErrors) -> QuillError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    QuillError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use super::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a CMS alias: starts with a letter, then letters, digits,
    /// or underscores only.
    pub fn safe_alias(value: &str) -> Result<(), ValidationError> {
        let mut chars = value.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::new("safe_alias"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(rules::not_blank("home").is_ok());
        assert!(rules::not_blank("   ").is_err());
        assert!(rules::not_blank("").is_err());
    }

    #[test]
    fn test_safe_alias() {
        assert!(rules::safe_alias("blogPost").is_ok());
        assert!(rules::safe_alias("page_2").is_ok());
        assert!(rules::safe_alias("2page").is_err());
        assert!(rules::safe_alias("blog-post").is_err());
        assert!(rules::safe_alias("").is_err());
    }

    #[test]
    fn test_validate_ext_produces_quill_error() {
        #[derive(Validate)]
        struct SaveModel {
            #[validate(length(min = 1, message = "Name is required"))]
            name: String,
        }

        let model = SaveModel { name: String::new() };
        let err = model.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("Name is required"));
    }
}
