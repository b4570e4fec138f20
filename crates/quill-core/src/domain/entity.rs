//! Shared surface of tree-structured entities.

use super::value_objects::TreePath;
use uuid::Uuid;

/// The fields every tree-structured entity (content, media, content types,
/// templates) exposes, allowing generic entity-to-basic mapping.
pub trait TreeEntity {
    /// The raw node ID.
    fn node_id(&self) -> i32;

    /// The stable UUID key.
    fn key(&self) -> Uuid;

    /// The invariant display name.
    fn name(&self) -> &str;

    /// The ancestor path.
    fn path(&self) -> &TreePath;

    /// The parent node ID.
    fn parent_id(&self) -> i32;

    /// Whether the entity is in the recycle bin.
    fn trashed(&self) -> bool {
        false
    }

    /// The tree icon, if the entity carries one.
    fn icon(&self) -> Option<&str> {
        None
    }
}
