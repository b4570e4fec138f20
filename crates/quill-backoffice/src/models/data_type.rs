//! Data type and property editor models.

use serde::{Deserialize, Serialize};

/// The database column type a data type stores its values in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatabaseType {
    /// Short text column.
    #[default]
    Nvarchar,
    /// Long text column.
    Ntext,
    /// Integer column.
    Integer,
    /// Decimal column.
    Decimal,
    /// Date/time column.
    Date,
}

/// A property editor row in the editor picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEditorBasic {
    /// Unique alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Icon class.
    pub icon: String,
    /// Picker group.
    pub group: String,
    /// Whether the editor is deprecated.
    pub is_deprecated: bool,
}

/// The data type editor model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeDisplay {
    /// Data type ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Alias of the configured property editor.
    pub editor_alias: String,
    /// Display name of the configured property editor.
    pub editor_name: String,
    /// The database column type derived from the editor's storage kind.
    pub database_type: DatabaseType,
}
