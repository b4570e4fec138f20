//! # Quill Core
//!
//! Core types for the Quill backoffice: the unified error type, typed IDs,
//! the domain entities and value objects the editing backend maps into
//! presentation models, and validation helpers.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
