//! Media entity.

use super::content::Property;
use super::content_type::ContentTypeRef;
use crate::domain::entity::TreeEntity;
use crate::domain::value_objects::TreePath;
use crate::id::{MediaId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A media item (image, file, folder) in the media tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Node ID.
    pub id: MediaId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Display name.
    pub name: String,

    /// Snapshot of the item's media type.
    pub content_type: ContentTypeRef,

    /// Parent node ID.
    pub parent_id: MediaId,

    /// Ancestor path.
    pub path: TreePath,

    /// Position among siblings.
    pub sort_order: i32,

    /// User who uploaded the item.
    pub creator_id: UserId,

    /// Whether the item is in the recycle bin.
    pub trashed: bool,

    /// Property values (source file, dimensions, etc.).
    pub properties: Vec<Property>,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl Media {
    /// Creates a media item under the given parent path.
    #[must_use]
    pub fn new(
        id: MediaId,
        name: impl Into<String>,
        content_type: ContentTypeRef,
        parent_id: MediaId,
        parent_path: &TreePath,
        creator_id: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            name: name.into(),
            content_type,
            parent_id,
            path: parent_path.for_child(id.value()),
            sort_order: 0,
            creator_id,
            trashed: false,
            properties: Vec::new(),
            create_date: now,
            update_date: now,
        }
    }

    /// Whether the item has been persisted.
    #[must_use]
    pub const fn has_identity(&self) -> bool {
        self.id.has_identity()
    }
}

impl TreeEntity for Media {
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

    fn trashed(&self) -> bool {
        self.trashed
    }

    fn icon(&self) -> Option<&str> {
        Some(&self.content_type.icon)
    }
}
