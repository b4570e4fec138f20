//! # Quill Backoffice
//!
//! The editing-UI models and the map definitions that populate them from
//! domain entities. Each definition registers its conversions with the
//! mapping registry at startup; request handlers then map entities through
//! the frozen [`quill_mapper::Mapper`] returned by
//! [`composition::build_backoffice_mapper`].

pub mod composition;
pub mod mapping;
pub mod models;

pub use composition::{build_backoffice_mapper, BackofficeServices};
