//! Section models.

use serde::{Deserialize, Serialize};

/// A backoffice section as shown in the section menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionModel {
    /// Unique section alias.
    pub alias: String,
    /// Localized section name; untranslated aliases keep the bracketed
    /// fallback form so callers can detect the missing translation.
    pub name: String,
}
