//! Configured language lookups.

use quill_core::{Language, LanguageId};

/// Lookups into the languages configured for variant content.
pub trait LanguageService: Send + Sync {
    /// Every configured language, default language first.
    fn get_all(&self) -> Vec<Language>;

    /// Fetches a language by ID.
    fn get_by_id(&self, id: LanguageId) -> Option<Language>;
}

/// Language service over a fixed language list.
pub struct InMemoryLanguageService {
    languages: Vec<Language>,
}

impl InMemoryLanguageService {
    /// Builds the service, ordering the default language first.
    #[must_use]
    pub fn new(mut languages: Vec<Language>) -> Self {
        languages.sort_by_key(|l| (!l.is_default, l.id));
        Self { languages }
    }
}

impl LanguageService for InMemoryLanguageService {
    fn get_all(&self) -> Vec<Language> {
        self.languages.clone()
    }

    fn get_by_id(&self, id: LanguageId) -> Option<Language> {
        self.languages.iter().find(|l| l.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::Culture;

    #[test]
    fn test_default_language_first() {
        let mut danish = Language::new(LanguageId::new(2), Culture::new("da-DK"), "Danish (Denmark)");
        danish.is_default = false;
        let mut english = Language::new(LanguageId::new(5), Culture::new("en-US"), "English (US)");
        english.is_default = true;

        let service = InMemoryLanguageService::new(vec![danish, english]);
        let all = service.get_all();
        assert!(all[0].is_default);
        assert_eq!(all[0].iso_code.as_str(), "en-US");
    }
}
