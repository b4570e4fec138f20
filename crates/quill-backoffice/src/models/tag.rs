//! Tag models.

use serde::{Deserialize, Serialize};

/// A tag as shown in tag pickers and the tag manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagModel {
    /// Tag ID.
    pub id: i32,
    /// The tag text.
    pub text: String,
    /// The tag group.
    pub group: String,
    /// How many nodes carry the tag.
    pub node_count: u64,
}
