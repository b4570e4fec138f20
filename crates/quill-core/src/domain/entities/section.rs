//! Backoffice section entity.

use serde::{Deserialize, Serialize};

/// A top-level backoffice section (content, media, settings, ...).
///
/// Section names are not stored; they are resolved per user culture from
/// the localization service using the `sections` area and the alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section alias, e.g. `"content"`.
    pub alias: String,

    /// Position in the section menu.
    pub sort_order: i32,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub fn new(alias: impl Into<String>, sort_order: i32) -> Self {
        Self {
            alias: alias.into(),
            sort_order,
        }
    }
}
