//! Backoffice user and user group entities.

use crate::domain::value_objects::{Culture, PermissionSet};
use crate::id::{ContentId, MediaId, UserGroupId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The account state of a backoffice user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UserState {
    /// May log in.
    #[default]
    Active,
    /// Disabled by an administrator.
    Disabled,
    /// Locked out after failed login attempts.
    LockedOut,
    /// Invited but never logged in.
    Invited,
}

/// A group of backoffice users sharing default permissions, allowed
/// sections, and tree start nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    /// Group ID.
    pub id: UserGroupId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Unique alias, e.g. `"editor"`.
    pub alias: String,

    /// Display name.
    pub name: String,

    /// Tree icon class.
    pub icon: String,

    /// Default permission letters granted on every node.
    pub permissions: PermissionSet,

    /// Aliases of the sections the group may open.
    pub allowed_sections: Vec<String>,

    /// Content tree start node; `None` means the whole tree.
    pub start_content_id: Option<ContentId>,

    /// Media tree start node; `None` means the whole tree.
    pub start_media_id: Option<MediaId>,
}

impl UserGroup {
    /// Creates a group with no permissions and no section access.
    #[must_use]
    pub fn new(id: UserGroupId, alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            key: Uuid::new_v4(),
            alias: alias.into(),
            name: name.into(),
            icon: "icon-users".to_string(),
            permissions: PermissionSet::empty(),
            allowed_sections: Vec::new(),
            start_content_id: None,
            start_media_id: None,
        }
    }
}

/// A backoffice user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Display name.
    pub name: String,

    /// Login name.
    pub username: String,

    /// Email address.
    pub email: String,

    /// The user's backoffice UI culture.
    pub language: Culture,

    /// Account state.
    pub user_state: UserState,

    /// Groups the user belongs to.
    pub groups: Vec<UserGroup>,

    /// Avatar image URL, if one is set.
    pub avatar_url: Option<String>,

    /// Consecutive failed login attempts.
    pub failed_password_attempts: u32,

    /// Last login timestamp.
    pub last_login_date: Option<DateTime<Utc>>,

    /// Last lockout timestamp.
    pub last_lockout_date: Option<DateTime<Utc>>,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl User {
    /// Creates an active user with no group memberships.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        language: Culture,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            email: email.into(),
            language,
            user_state: UserState::Active,
            groups: Vec::new(),
            avatar_url: None,
            failed_password_attempts: 0,
            last_login_date: None,
            last_lockout_date: None,
            create_date: now,
            update_date: now,
        }
    }

    /// The union of the allowed sections of every group the user is in.
    #[must_use]
    pub fn allowed_sections(&self) -> Vec<String> {
        let mut sections: Vec<String> = self
            .groups
            .iter()
            .flat_map(|g| g.allowed_sections.iter().cloned())
            .collect();
        sections.sort();
        sections.dedup();
        sections
    }

    /// The union of the default permissions of every group the user is in.
    #[must_use]
    pub fn default_permissions(&self) -> PermissionSet {
        self.groups
            .iter()
            .fold(PermissionSet::empty(), |acc, g| acc.union(&g.permissions))
    }

    /// Whether the user belongs to the group with the given ID.
    #[must_use]
    pub fn is_in_group(&self, group_id: UserGroupId) -> bool {
        self.groups.iter().any(|g| g.id == group_id)
    }

    /// Records a successful login.
    pub fn record_login(&mut self) {
        self.last_login_date = Some(Utc::now());
        self.failed_password_attempts = 0;
        self.update_date = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_group() -> UserGroup {
        let mut group = UserGroup::new(UserGroupId::new(2), "editor", "Editors");
        group.permissions = PermissionSet::from_letters("FCA");
        group.allowed_sections = vec!["content".to_string(), "media".to_string()];
        group
    }

    fn writer_group() -> UserGroup {
        let mut group = UserGroup::new(UserGroupId::new(3), "writer", "Writers");
        group.permissions = PermissionSet::from_letters("FA");
        group.allowed_sections = vec!["content".to_string()];
        group
    }

    #[test]
    fn test_allowed_sections_union() {
        let mut user = User::new(UserId::new(1), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        user.groups = vec![editor_group(), writer_group()];
        assert_eq!(user.allowed_sections(), vec!["content", "media"]);
    }

    #[test]
    fn test_default_permissions_union() {
        let mut user = User::new(UserId::new(1), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        user.groups = vec![editor_group(), writer_group()];
        assert_eq!(user.default_permissions().letters(), "ACF");
    }

    #[test]
    fn test_no_groups_no_permissions() {
        let user = User::new(UserId::new(1), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        assert!(user.default_permissions().is_empty());
        assert!(user.allowed_sections().is_empty());
    }

    #[test]
    fn test_is_in_group() {
        let mut user = User::new(UserId::new(1), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        user.groups = vec![editor_group()];
        assert!(user.is_in_group(UserGroupId::new(2)));
        assert!(!user.is_in_group(UserGroupId::new(3)));
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new(UserId::new(1), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        user.failed_password_attempts = 3;
        user.record_login();
        assert_eq!(user.failed_password_attempts, 0);
        assert!(user.last_login_date.is_some());
    }
}
