//! Language entity.

use crate::domain::value_objects::Culture;
use crate::id::LanguageId;
use serde::{Deserialize, Serialize};

/// A language configured for the site's variant content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language ID.
    pub id: LanguageId,

    /// The culture this language maps to.
    pub iso_code: Culture,

    /// Human-readable name, e.g. `"Danish (Denmark)"`.
    pub culture_name: String,

    /// Whether this is the site default language.
    pub is_default: bool,

    /// Whether content must be published in this language.
    pub is_mandatory: bool,

    /// Language to fall back to when a variant value is missing.
    pub fallback_language_id: Option<LanguageId>,
}

impl Language {
    /// Creates a non-default, non-mandatory language.
    #[must_use]
    pub fn new(id: LanguageId, iso_code: Culture, culture_name: impl Into<String>) -> Self {
        Self {
            id,
            iso_code,
            culture_name: culture_name.into(),
            is_default: false,
            is_mandatory: false,
            fallback_language_id: None,
        }
    }
}
