//! Content editing models.

use super::user::UserProfile;
use chrono::{DateTime, Utc};
use quill_core::{ContentSavedState, Culture, Udi, UrlInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// One editable property as shown in the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPropertyDisplay {
    /// Property type alias.
    pub alias: String,
    /// Label shown above the editor.
    pub label: String,
    /// Help text shown under the label.
    pub description: Option<String>,
    /// The current value.
    pub value: Option<JsonValue>,
    /// Alias of the property editor rendering the value.
    pub editor: String,
}

/// One culture variant of a content item in the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVariantDisplay {
    /// The variant name for its culture.
    pub name: String,
    /// Name with the culture suffix, as shown in the variant switcher.
    pub display_name: String,
    /// The variant's culture; `None` for invariant content.
    pub culture: Option<Culture>,
    /// Save/publish state.
    pub state: ContentSavedState,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last save timestamp.
    pub update_date: DateTime<Utc>,
    /// Last publish timestamp, if ever published.
    pub publish_date: Option<DateTime<Utc>>,
}

impl ContentVariantDisplay {
    /// Creates an empty variant for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            display_name: String::new(),
            culture: None,
            state: ContentSavedState::NotCreated,
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
            publish_date: None,
        }
    }
}

impl Default for ContentVariantDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// The full content editor model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemDisplay {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Universal identifier.
    pub udi: Option<Udi>,
    /// Display name for the ambient culture.
    pub name: String,
    /// Content type node ID.
    pub content_type_id: i32,
    /// Content type alias.
    pub content_type_alias: String,
    /// Content type display name.
    pub content_type_name: String,
    /// Tree icon class.
    pub icon: String,
    /// Whether the item renders children as a list view.
    pub is_container: bool,
    /// Whether the item's type is an element type.
    pub is_element: bool,
    /// Whether an ancestor renders this item inside a list view.
    pub is_child_of_list_view: bool,
    /// Whether the item is in the recycle bin.
    pub trashed: bool,
    /// Parent node ID.
    pub parent_id: i32,
    /// Ancestor path.
    pub path: String,
    /// Position among siblings.
    pub sort_order: i32,
    /// Alias of the assigned template, if any.
    pub template_alias: Option<String>,
    /// User who created the item.
    pub owner: Option<UserProfile>,
    /// User who last saved the item.
    pub updater: Option<UserProfile>,
    /// Permission letters the current user holds on the item.
    pub allowed_actions: Vec<String>,
    /// Resolved public URLs, one per culture.
    pub urls: Vec<UrlInfo>,
    /// The item's editable properties.
    pub properties: Vec<ContentPropertyDisplay>,
    /// One entry per culture variant.
    pub variants: Vec<ContentVariantDisplay>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last save timestamp.
    pub update_date: DateTime<Utc>,
}

impl ContentItemDisplay {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            udi: None,
            name: String::new(),
            content_type_id: 0,
            content_type_alias: String::new(),
            content_type_name: String::new(),
            icon: String::new(),
            is_container: false,
            is_element: false,
            is_child_of_list_view: false,
            trashed: false,
            parent_id: 0,
            path: String::new(),
            sort_order: 0,
            template_alias: None,
            owner: None,
            updater: None,
            allowed_actions: Vec::new(),
            urls: Vec::new(),
            properties: Vec::new(),
            variants: Vec::new(),
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for ContentItemDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// A content row in listings and list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemBasic {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Universal identifier.
    pub udi: Option<Udi>,
    /// Display name for the ambient culture.
    pub name: String,
    /// Content type alias.
    pub content_type_alias: String,
    /// Tree icon class.
    pub icon: String,
    /// Parent node ID.
    pub parent_id: i32,
    /// Ancestor path.
    pub path: String,
    /// Position among siblings.
    pub sort_order: i32,
    /// Save/publish state.
    pub state: ContentSavedState,
    /// Whether the item's names vary by culture.
    pub varies_by_culture: bool,
    /// User who created the item.
    pub owner: Option<UserProfile>,
    /// User who last saved the item.
    pub updater: Option<UserProfile>,
    /// The item's properties.
    pub properties: Vec<ContentPropertyDisplay>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last save timestamp.
    pub update_date: DateTime<Utc>,
}

impl ContentItemBasic {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            udi: None,
            name: String::new(),
            content_type_alias: String::new(),
            icon: String::new(),
            parent_id: 0,
            path: String::new(),
            sort_order: 0,
            state: ContentSavedState::NotCreated,
            varies_by_culture: false,
            owner: None,
            updater: None,
            properties: Vec::new(),
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for ContentItemBasic {
    fn default() -> Self {
        Self::new()
    }
}
