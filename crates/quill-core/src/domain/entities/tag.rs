//! Tag entity.

use crate::id::TagId;
use serde::{Deserialize, Serialize};

/// A tag assigned to content or media, grouped by tag group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag ID.
    pub id: TagId,

    /// The tag text.
    pub text: String,

    /// The tag group, e.g. `"colors"`.
    pub group: String,

    /// How many nodes carry this tag.
    pub node_count: u64,
}

impl Tag {
    /// Creates a tag in the given group.
    #[must_use]
    pub fn new(id: TagId, text: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            group: group.into(),
            node_count: 0,
        }
    }
}
