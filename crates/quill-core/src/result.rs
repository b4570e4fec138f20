//! Result type alias for Quill operations.

use crate::QuillError;

/// A specialized `Result` type for Quill operations.
pub type QuillResult<T> = Result<T, QuillError>;
