//! Content entity.

use super::content_type::ContentTypeRef;
use crate::domain::entity::TreeEntity;
use crate::domain::value_objects::{Culture, TreePath};
use crate::id::{ContentId, TemplateId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single property value on a content or media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Property type alias, e.g. `"bodyText"`.
    pub alias: String,

    /// Alias of the property editor that edits this value.
    pub editor_alias: String,

    /// The stored value, if any.
    pub value: Option<JsonValue>,
}

impl Property {
    /// Creates a property with a value.
    #[must_use]
    pub fn new(alias: impl Into<String>, editor_alias: impl Into<String>, value: JsonValue) -> Self {
        Self {
            alias: alias.into(),
            editor_alias: editor_alias.into(),
            value: Some(value),
        }
    }

    /// Creates a property without a value.
    #[must_use]
    pub fn empty(alias: impl Into<String>, editor_alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            editor_alias: editor_alias.into(),
            value: None,
        }
    }
}

/// The saved/published state of a content item as shown in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSavedState {
    /// Never saved.
    NotCreated,
    /// Saved but never published.
    Draft,
    /// Published with no pending edits.
    Published,
    /// Published with newer saved edits.
    PublishedPendingChanges,
}

/// A content item in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Node ID.
    pub id: ContentId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Invariant display name.
    pub name: String,

    /// Per-culture names for variant content; empty for invariant content.
    pub culture_names: BTreeMap<Culture, String>,

    /// Snapshot of the item's content type.
    pub content_type: ContentTypeRef,

    /// Parent node ID.
    pub parent_id: ContentId,

    /// Ancestor path.
    pub path: TreePath,

    /// Position among siblings.
    pub sort_order: i32,

    /// Assigned template, if any.
    pub template_id: Option<TemplateId>,

    /// User who created the item.
    pub creator_id: UserId,

    /// User who last saved the item.
    pub writer_id: UserId,

    /// Whether a published version exists.
    pub published: bool,

    /// Whether there are saved edits newer than the published version.
    pub edited: bool,

    /// Whether the item is in the recycle bin.
    pub trashed: bool,

    /// Property values.
    pub properties: Vec<Property>,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last save timestamp.
    pub update_date: DateTime<Utc>,

    /// Last publish timestamp, if ever published.
    pub publish_date: Option<DateTime<Utc>>,
}

impl Content {
    /// Creates an unpublished content item under the given parent path.
    #[must_use]
    pub fn new(
        id: ContentId,
        name: impl Into<String>,
        content_type: ContentTypeRef,
        parent_id: ContentId,
        parent_path: &TreePath,
        creator_id: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            name: name.into(),
            culture_names: BTreeMap::new(),
            content_type,
            parent_id,
            path: parent_path.for_child(id.value()),
            sort_order: 0,
            template_id: None,
            creator_id,
            writer_id: creator_id,
            published: false,
            edited: true,
            trashed: false,
            properties: Vec::new(),
            create_date: now,
            update_date: now,
            publish_date: None,
        }
    }

    /// Whether the item has been persisted.
    #[must_use]
    pub const fn has_identity(&self) -> bool {
        self.id.has_identity()
    }

    /// Whether the item's names vary by culture.
    #[must_use]
    pub const fn varies_by_culture(&self) -> bool {
        self.content_type.varies_by_culture
    }

    /// Resolves the display name for a culture, falling back to the
    /// invariant name for unknown cultures and invariant content.
    #[must_use]
    pub fn name_for_culture(&self, culture: Option<&Culture>) -> &str {
        match culture {
            Some(culture) if self.varies_by_culture() => self
                .culture_names
                .get(culture)
                .map_or(self.name.as_str(), String::as_str),
            _ => &self.name,
        }
    }

    /// Finds a property by alias.
    #[must_use]
    pub fn property(&self, alias: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.alias == alias)
    }

    /// The editor save state of this item.
    #[must_use]
    pub fn saved_state(&self) -> ContentSavedState {
        if !self.has_identity() {
            ContentSavedState::NotCreated
        } else if !self.published {
            ContentSavedState::Draft
        } else if self.edited {
            ContentSavedState::PublishedPendingChanges
        } else {
            ContentSavedState::Published
        }
    }
}

impl TreeEntity for Content {
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
