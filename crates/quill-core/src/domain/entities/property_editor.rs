//! Property editor and data type entities.

use crate::id::DataTypeId;
use serde::{Deserialize, Serialize};

/// How a property editor's values are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueStorageType {
    /// Long text.
    Ntext,
    /// Short text.
    Nvarchar,
    /// Whole number.
    Integer,
    /// Decimal number.
    Decimal,
    /// Date and time.
    Date,
}

/// A registered property editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyEditor {
    /// Unique alias, e.g. `"Quill.RichText"`.
    pub alias: String,

    /// Display name used for sort ordering in pickers.
    pub name: String,

    /// Icon class.
    pub icon: String,

    /// Picker group, e.g. `"Common"`.
    pub group: String,

    /// Whether the editor is deprecated and hidden from pickers by default.
    pub is_deprecated: bool,

    /// How the editor stores its values.
    pub value_type: ValueStorageType,
}

impl PropertyEditor {
    /// Creates a non-deprecated editor.
    #[must_use]
    pub fn new(
        alias: impl Into<String>,
        name: impl Into<String>,
        value_type: ValueStorageType,
    ) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            icon: "icon-autofill".to_string(),
            group: "Common".to_string(),
            is_deprecated: false,
            value_type,
        }
    }

    /// Marks the editor deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.is_deprecated = true;
        self
    }
}

/// A configured data type: a property editor plus configuration, usable on
/// content type properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataType {
    /// Data type ID.
    pub id: DataTypeId,

    /// Display name.
    pub name: String,

    /// Alias of the property editor this data type configures.
    pub editor_alias: String,
}

impl DataType {
    /// Creates a data type for the given editor.
    #[must_use]
    pub fn new(id: DataTypeId, name: impl Into<String>, editor_alias: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            editor_alias: editor_alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deprecated_builder() {
        let editor = PropertyEditor::new("Quill.Legacy", "Legacy Editor", ValueStorageType::Ntext).deprecated();
        assert!(editor.is_deprecated);
    }
}
