//! Media editing models.

use super::content::ContentPropertyDisplay;
use super::user::UserProfile;
use chrono::{DateTime, Utc};
use quill_core::Udi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The media editor model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemDisplay {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Universal identifier.
    pub udi: Option<Udi>,
    /// Display name.
    pub name: String,
    /// Media type alias.
    pub media_type_alias: String,
    /// Tree icon class.
    pub icon: String,
    /// Parent node ID.
    pub parent_id: i32,
    /// Ancestor path.
    pub path: String,
    /// Position among siblings.
    pub sort_order: i32,
    /// Whether the item is in the recycle bin.
    pub trashed: bool,
    /// User who uploaded the item.
    pub owner: Option<UserProfile>,
    /// The item's properties.
    pub properties: Vec<ContentPropertyDisplay>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl MediaItemDisplay {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            udi: None,
            name: String::new(),
            media_type_alias: String::new(),
            icon: String::new(),
            parent_id: 0,
            path: String::new(),
            sort_order: 0,
            trashed: false,
            owner: None,
            properties: Vec::new(),
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for MediaItemDisplay {
    fn default() -> Self {
        Self::new()
    }
}
