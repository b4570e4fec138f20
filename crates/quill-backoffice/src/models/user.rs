//! User-related editing models.

use super::entity_basic::EntityBasic;
use super::section::SectionModel;
use chrono::{DateTime, Utc};
use quill_core::UserState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

/// The owner/updater stamp shown on content and media items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    pub user_id: i32,
    /// Display name.
    pub name: String,
}

/// A user row in backoffice listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBasic {
    /// User ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// The resolved backoffice UI culture.
    pub culture: String,
    /// Account state.
    pub user_state: UserState,
    /// Avatar image URL, if one is set.
    pub avatar_url: Option<String>,
    /// Last login timestamp.
    pub last_login_date: Option<DateTime<Utc>>,
}

/// The full user editor model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDisplay {
    /// User ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// The resolved backoffice UI culture.
    pub culture: String,
    /// Account state.
    pub user_state: UserState,
    /// Avatar image URL, if one is set.
    pub avatar_url: Option<String>,
    /// Cultures selectable for the backoffice UI, ISO code to display name.
    pub available_cultures: BTreeMap<String, String>,
    /// The groups the user belongs to.
    pub user_groups: Vec<UserGroupBasic>,
    /// Resolved content tree start nodes.
    pub start_content_ids: Vec<EntityBasic>,
    /// Resolved media tree start nodes.
    pub start_media_ids: Vec<EntityBasic>,
    /// Consecutive failed login attempts.
    pub failed_password_attempts: u32,
    /// Last login timestamp.
    pub last_login_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl UserDisplay {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            name: String::new(),
            username: String::new(),
            email: String::new(),
            culture: String::new(),
            user_state: UserState::Active,
            avatar_url: None,
            available_cultures: BTreeMap::new(),
            user_groups: Vec::new(),
            start_content_ids: Vec::new(),
            start_media_ids: Vec::new(),
            failed_password_attempts: 0,
            last_login_date: None,
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for UserDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// A user group row, with its sections and start nodes resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupBasic {
    /// Group ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Unique alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Tree icon class.
    pub icon: String,
    /// How many users belong to the group.
    pub user_count: usize,
    /// The sections the group may open, with localized names.
    pub sections: Vec<SectionModel>,
    /// The group's content start node, if restricted.
    pub content_start_node: Option<EntityBasic>,
    /// The group's media start node, if restricted.
    pub media_start_node: Option<EntityBasic>,
}

/// Inbound changes to an existing user, applied in place.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserSave {
    /// The user being edited.
    pub id: i32,

    /// New display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// New email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// New login name.
    #[validate(length(min = 1, max = 125, message = "Username must be 1-125 characters"))]
    pub username: String,

    /// New backoffice UI culture.
    #[validate(length(min = 2, message = "Culture is required"))]
    pub culture: String,
}
