//! Unified error types for all layers of the backoffice.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of the Quill backoffice.
///
/// Covers domain lookups, mapping registry failures, and configuration
/// errors. Mapping errors are programmer/configuration errors and are never
/// retried; they fail the call that raised them.
#[derive(Error, Debug)]
pub enum QuillError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate alias)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Mapping Errors ============
    /// No conversion registered for the requested type pair
    #[error("No map defined for {source_type} -> {target_type}")]
    UnmappedType {
        source_type: &'static str,
        target_type: &'static str,
    },

    /// The same type pair was registered twice
    #[error("A map is already defined for {source_type} -> {target_type}")]
    DuplicateDefinition {
        source_type: &'static str,
        target_type: &'static str,
    },

    /// A required external reference could not be resolved during a
    /// conversion (dangling reference, data-integrity problem)
    #[error("Dangling reference: {resource_type} {reference}")]
    DanglingReference {
        resource_type: &'static str,
        reference: String,
    },

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuillError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::UnmappedType { .. } => "UNMAPPED_TYPE",
            Self::DuplicateDefinition { .. } => "DUPLICATE_DEFINITION",
            Self::DanglingReference { .. } => "DANGLING_REFERENCE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a dangling reference error.
    #[must_use]
    pub fn dangling_reference<T: ToString>(resource_type: &'static str, reference: T) -> Self {
        Self::DanglingReference {
            resource_type,
            reference: reference.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was raised by the mapping registry itself
    /// (as opposed to a conversion function or collaborator).
    #[must_use]
    pub const fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::UnmappedType { .. } | Self::DuplicateDefinition { .. }
        )
    }
}

impl From<serde_json::Error> for QuillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error payload surfaced to the editing UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `QuillError`.
    #[must_use]
    pub fn from_error(error: &QuillError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&QuillError> for ErrorResponse {
    fn from(error: &QuillError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QuillError::not_found("Content", 1).error_code(), "NOT_FOUND");
        assert_eq!(QuillError::validation("bad alias").error_code(), "VALIDATION_ERROR");
        assert_eq!(QuillError::conflict("duplicate alias").error_code(), "CONFLICT");
        assert_eq!(
            QuillError::dangling_reference("PropertyEditor", "missing.editor").error_code(),
            "DANGLING_REFERENCE"
        );
        assert_eq!(QuillError::configuration("bad culture").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(QuillError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_mapping_error_codes() {
        let unmapped = QuillError::UnmappedType {
            source_type: "Tag",
            target_type: "TagModel",
        };
        assert_eq!(unmapped.error_code(), "UNMAPPED_TYPE");
        assert!(unmapped.is_registry_error());

        let duplicate = QuillError::DuplicateDefinition {
            source_type: "Tag",
            target_type: "TagModel",
        };
        assert_eq!(duplicate.error_code(), "DUPLICATE_DEFINITION");
        assert!(duplicate.is_registry_error());

        assert!(!QuillError::not_found("Content", 1).is_registry_error());
    }

    #[test]
    fn test_error_display() {
        let err = QuillError::UnmappedType {
            source_type: "Tag",
            target_type: "TagModel",
        };
        assert!(err.to_string().contains("Tag"));
        assert!(err.to_string().contains("TagModel"));

        let err = QuillError::dangling_reference("PropertyEditor", "missing.editor");
        assert!(err.to_string().contains("missing.editor"));
    }

    #[test]
    fn test_error_constructors() {
        let not_found = QuillError::not_found("Content", "1059");
        assert!(not_found.to_string().contains("Content"));
        assert!(not_found.to_string().contains("1059"));

        let validation = QuillError::validation("invalid alias");
        assert!(validation.to_string().contains("invalid alias"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = QuillError::not_found("Media", 7);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = QuillError::validation("bad input");
        let details = vec![FieldError {
            field: "alias".to_string(),
            message: "Alias is required".to_string(),
            code: "not_blank".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
