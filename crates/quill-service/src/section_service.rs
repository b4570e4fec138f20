//! Backoffice section lookups.

use quill_core::Section;

/// Lookups into the registered backoffice sections.
pub trait SectionService: Send + Sync {
    /// Every registered section, ordered by sort order.
    fn get_sections(&self) -> Vec<Section>;
}

/// Section service over a fixed section list.
pub struct InMemorySectionService {
    sections: Vec<Section>,
}

impl InMemorySectionService {
    /// Builds the service, ordering the sections by sort order.
    #[must_use]
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.sort_order);
        Self { sections }
    }
}

impl SectionService for InMemorySectionService {
    fn get_sections(&self) -> Vec<Section> {
        self.sections.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_ordered() {
        let service = InMemorySectionService::new(vec![
            Section::new("settings", 10),
            Section::new("content", 0),
            Section::new("media", 5),
        ]);
        let aliases: Vec<String> = service.get_sections().into_iter().map(|s| s.alias).collect();
        assert_eq!(aliases, vec!["content", "media", "settings"]);
    }
}
