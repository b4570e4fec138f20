//! Document type editing models.

use chrono::{DateTime, Utc};
use quill_core::Udi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The document type editor model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeDisplay {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Universal identifier.
    pub udi: Option<Udi>,
    /// Unique alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Description shown in the editor.
    pub description: Option<String>,
    /// Tree icon class.
    pub icon: String,
    /// Thumbnail shown in the create dialog.
    pub thumbnail: String,
    /// Absolute path of the thumbnail image under the backoffice.
    pub thumbnail_file_path: String,
    /// Parent type node ID.
    pub parent_id: i32,
    /// Ancestor path in the settings tree.
    pub path: String,
    /// Whether content of this type may be created at the tree root.
    pub allowed_as_root: bool,
    /// Whether the type renders its children as a list view.
    pub is_container: bool,
    /// Whether the type is an element type.
    pub is_element: bool,
    /// IDs of the child types allowed under this one, in create-dialog
    /// order.
    pub allowed_content_types: Vec<i32>,
    /// Aliases of the types composed into this one.
    pub composite_content_types: Vec<String>,
    /// Aliases of inherited compositions that cannot be removed here,
    /// ordered alphabetically.
    pub locked_composite_content_types: Vec<String>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl DocumentTypeDisplay {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            udi: None,
            alias: String::new(),
            name: String::new(),
            description: None,
            icon: String::new(),
            thumbnail: String::new(),
            thumbnail_file_path: String::new(),
            parent_id: 0,
            path: String::new(),
            allowed_as_root: false,
            is_container: false,
            is_element: false,
            allowed_content_types: Vec::new(),
            composite_content_types: Vec::new(),
            locked_composite_content_types: Vec::new(),
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for DocumentTypeDisplay {
    fn default() -> Self {
        Self::new()
    }
}
