//! The property editor registry.

use quill_core::PropertyEditor;

/// All property editors registered with the backoffice, ordered by name.
pub struct PropertyEditorCollection {
    editors: Vec<PropertyEditor>,
}

impl PropertyEditorCollection {
    /// Builds the collection, ordering the editors by display name.
    #[must_use]
    pub fn new(mut editors: Vec<PropertyEditor>) -> Self {
        editors.sort_by(|a, b| a.name.cmp(&b.name));
        Self { editors }
    }

    /// Finds an editor by alias.
    #[must_use]
    pub fn get_by_alias(&self, alias: &str) -> Option<&PropertyEditor> {
        self.editors.iter().find(|e| e.alias == alias)
    }

    /// Iterates every registered editor in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyEditor> {
        self.editors.iter()
    }

    /// Iterates the editors shown in pickers (deprecated ones excluded).
    pub fn non_deprecated(&self) -> impl Iterator<Item = &PropertyEditor> {
        self.editors.iter().filter(|e| !e.is_deprecated)
    }

    /// The number of registered editors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether no editors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::ValueStorageType;

    fn collection() -> PropertyEditorCollection {
        PropertyEditorCollection::new(vec![
            PropertyEditor::new("Quill.TextBox", "Text Box", ValueStorageType::Nvarchar),
            PropertyEditor::new("Quill.RichText", "Rich Text", ValueStorageType::Ntext),
            PropertyEditor::new("Quill.Legacy", "Ancient Editor", ValueStorageType::Ntext).deprecated(),
        ])
    }

    #[test]
    fn test_get_by_alias() {
        let editors = collection();
        assert!(editors.get_by_alias("Quill.RichText").is_some());
        assert!(editors.get_by_alias("Quill.Missing").is_none());
    }

    #[test]
    fn test_name_ordering() {
        let editors = collection();
        let names: Vec<&str> = editors.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ancient Editor", "Rich Text", "Text Box"]);
    }

    #[test]
    fn test_non_deprecated_filter() {
        let editors = collection();
        assert_eq!(editors.len(), 3);
        assert_eq!(editors.non_deprecated().count(), 2);
    }
}
