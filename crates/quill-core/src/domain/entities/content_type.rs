//! Content type entity.

use crate::domain::entity::TreeEntity;
use crate::domain::value_objects::TreePath;
use crate::id::ContentTypeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A child content type allowed under a content type, with its sort order
/// in the create dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedContentType {
    /// The allowed child type.
    pub id: ContentTypeId,
    /// The child type's alias.
    pub alias: String,
    /// Position in the create dialog.
    pub sort_order: i32,
}

/// A content type (document type) definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentType {
    /// Node ID of the type.
    pub id: ContentTypeId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Unique alias, e.g. `"blogPost"`.
    pub alias: String,

    /// Display name.
    pub name: String,

    /// Optional description shown in the editor.
    pub description: Option<String>,

    /// Tree icon class.
    pub icon: String,

    /// Thumbnail shown in the create dialog.
    pub thumbnail: String,

    /// Parent type node ID (folder or root).
    pub parent_id: ContentTypeId,

    /// Ancestor path of the type in the settings tree.
    pub path: TreePath,

    /// Whether content of this type may be created at the tree root.
    pub allowed_as_root: bool,

    /// Whether the type renders its children as a list view.
    pub is_container: bool,

    /// Whether the type is an element type (no URL, nested use only).
    pub is_element: bool,

    /// Whether content of this type varies by culture.
    pub varies_by_culture: bool,

    /// Child types allowed under content of this type.
    pub allowed_content_types: Vec<AllowedContentType>,

    /// Aliases of the types composed into this one.
    pub composition_aliases: Vec<String>,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl ContentType {
    /// Creates a content type with the given alias and name, parented at
    /// the root of the settings tree.
    #[must_use]
    pub fn new(id: ContentTypeId, alias: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            alias: alias.into(),
            name: name.into(),
            description: None,
            icon: "icon-document".to_string(),
            thumbnail: "folder.png".to_string(),
            parent_id: ContentTypeId::root(),
            path: TreePath::top_level(id.value()),
            allowed_as_root: false,
            is_container: false,
            is_element: false,
            varies_by_culture: false,
            allowed_content_types: Vec::new(),
            composition_aliases: Vec::new(),
            create_date: now,
            update_date: now,
        }
    }
}

impl TreeEntity for ContentType {
    fn node_id(&self) -> i32 {
        self.id.value()
    }

    fn key(&self) -> Uuid {
        self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &TreePath {
        &self.path
    }

    fn parent_id(&self) -> i32 {
        self.parent_id.value()
    }

    fn icon(&self) -> Option<&str> {
        Some(&self.icon)
    }
}

/// The subset of a content type that content and media entities carry with
/// them, so conversions can read type metadata without a service lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeRef {
    /// Node ID of the type.
    pub id: ContentTypeId,
    /// Stable UUID key.
    pub key: Uuid,
    /// Unique alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Tree icon class.
    pub icon: String,
    /// Whether the type renders children as a list view.
    pub is_container: bool,
    /// Whether the type is an element type.
    pub is_element: bool,
    /// Whether content of this type varies by culture.
    pub varies_by_culture: bool,
}

impl From<&ContentType> for ContentTypeRef {
    fn from(content_type: &ContentType) -> Self {
        Self {
            id: content_type.id,
            key: content_type.key,
            alias: content_type.alias.clone(),
            name: content_type.name.clone(),
            icon: content_type.icon.clone(),
            is_container: content_type.is_container,
            is_element: content_type.is_element,
            varies_by_culture: content_type.varies_by_culture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_type() {
        let ct = ContentType::new(ContentTypeId::new(1100), "blogPost", "Blog Post");
        assert_eq!(ct.alias, "blogPost");
        assert_eq!(ct.path.as_str(), "-1,1100");
        assert!(!ct.is_container);
    }

    #[test]
    fn test_content_type_ref_snapshot() {
        let mut ct = ContentType::new(ContentTypeId::new(1100), "gallery", "Gallery");
        ct.is_container = true;
        let snapshot = ContentTypeRef::from(&ct);
        assert_eq!(snapshot.alias, "gallery");
        assert!(snapshot.is_container);
        assert_eq!(snapshot.key, ct.key);
    }
}
