//! Backoffice text localization.

use quill_core::Culture;
use std::collections::HashMap;

/// Checks whether a localized value is an actual translation.
///
/// Untranslated keys come back in the bracketed fallback form
/// (`"[someAlias]"`); callers use this to decide whether a translation was
/// found.
#[must_use]
pub fn is_localized(value: &str) -> bool {
    !(value.starts_with('[') && value.ends_with(']'))
}

/// Resolves backoffice UI texts by area and alias.
pub trait LocalizedTextService: Send + Sync {
    /// Localizes `area`/`alias` for the given culture (or the service's
    /// default culture). Untranslated keys yield the bracketed fallback
    /// `"[alias]"`.
    fn localize(&self, area: &str, alias: &str, culture: Option<&Culture>) -> String;
}

/// Text service over fixed in-memory translation tables.
pub struct InMemoryTextService {
    default_culture: Culture,
    /// Translations keyed by culture, then `"area/alias"`.
    translations: HashMap<Culture, HashMap<String, String>>,
}

impl InMemoryTextService {
    /// Creates an empty text service with the given default culture.
    #[must_use]
    pub fn new(default_culture: Culture) -> Self {
        Self {
            default_culture,
            translations: HashMap::new(),
        }
    }

    /// Adds a translation for a culture.
    #[must_use]
    pub fn with_translation(
        mut self,
        culture: Culture,
        area: &str,
        alias: &str,
        value: impl Into<String>,
    ) -> Self {
        self.translations
            .entry(culture)
            .or_default()
            .insert(format!("{}/{}", area, alias), value.into());
        self
    }
}

impl LocalizedTextService for InMemoryTextService {
    fn localize(&self, area: &str, alias: &str, culture: Option<&Culture>) -> String {
        let culture = culture.unwrap_or(&self.default_culture);
        let key = format!("{}/{}", area, alias);
        self.translations
            .get(culture)
            .and_then(|table| table.get(&key))
            .cloned()
            .unwrap_or_else(|| format!("[{}]", alias))
    }
}
