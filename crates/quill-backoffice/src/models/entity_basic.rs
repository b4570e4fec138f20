//! Minimal entity representation used across trees and pickers.

use quill_core::Udi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The minimal representation of a tree entity: enough for tree nodes,
/// pickers, and start-node lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBasic {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Display name.
    pub name: String,
    /// Tree icon class.
    pub icon: String,
    /// Whether the entity is in the recycle bin.
    pub trashed: bool,
    /// Parent node ID.
    pub parent_id: i32,
    /// Ancestor path.
    pub path: String,
    /// Universal identifier, when the entity type has one.
    pub udi: Option<Udi>,
}

impl EntityBasic {
    /// The synthetic node representing a whole tree's root, shown when a
    /// user's start node is the root itself.
    #[must_use]
    pub fn root_node(name: impl Into<String>) -> Self {
        Self {
            id: -1,
            key: Uuid::nil(),
            name: name.into(),
            icon: "icon-folder".to_string(),
            trashed: false,
            parent_id: -1,
            path: "-1".to_string(),
            udi: None,
        }
    }
}
