//! Backoffice user and permission lookups.

use quill_core::{PermissionSet, TreePath, User, UserGroupId, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Lookups into the backoffice user store.
pub trait UserService: Send + Sync {
    /// Fetches a user by ID.
    fn get_by_id(&self, id: UserId) -> Option<User>;

    /// Resolves the permissions a user holds on the node with the given
    /// ancestor path: the deepest explicit assignment along the path wins,
    /// falling back to the user's group default permissions.
    fn get_permissions_for_path(&self, user: &User, path: &TreePath) -> PermissionSet;

    /// Every user belonging to the given group.
    fn get_all_in_group(&self, group_id: UserGroupId) -> Vec<User>;
}

/// User service over a fixed in-memory store.
pub struct InMemoryUserService {
    by_id: HashMap<UserId, User>,
    /// Explicit per-node permission assignments, keyed by user and node ID.
    assigned: HashMap<(UserId, i32), PermissionSet>,
}

impl InMemoryUserService {
    /// Builds the service from a list of users.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            by_id: users.into_iter().map(|u| (u.id, u)).collect(),
            assigned: HashMap::new(),
        }
    }

    /// Adds an explicit permission assignment for a user on a node.
    #[must_use]
    pub fn with_assignment(mut self, user_id: UserId, node_id: i32, permissions: PermissionSet) -> Self {
        self.assigned.insert((user_id, node_id), permissions);
        self
    }
}

impl UserService for InMemoryUserService {
    fn get_by_id(&self, id: UserId) -> Option<User> {
        self.by_id.get(&id).cloned()
    }

    fn get_permissions_for_path(&self, user: &User, path: &TreePath) -> PermissionSet {
        // Deepest explicit assignment along the path wins.
        for node_id in path.ids().iter().rev() {
            if let Some(assigned) = self.assigned.get(&(user.id, *node_id)) {
                debug!("Explicit permissions for user {} on node {}: {}", user.id, node_id, assigned.letters());
                return assigned.clone();
            }
        }
        user.default_permissions()
    }

    fn get_all_in_group(&self, group_id: UserGroupId) -> Vec<User> {
        let mut users: Vec<User> = self
            .by_id
            .values()
            .filter(|u| u.is_in_group(group_id))
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id);
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Culture, UserGroup};

    fn editor() -> User {
        let mut group = UserGroup::new(UserGroupId::new(2), "editor", "Editors");
        group.permissions = PermissionSet::from_letters("FA");
        let mut user = User::new(UserId::new(7), "Ann", "ann", "ann@example.com", Culture::new("en-US"));
        user.groups = vec![group];
        user
    }

    #[test]
    fn test_group_defaults_apply_without_assignment() {
        let user = editor();
        let service = InMemoryUserService::new(vec![user.clone()]);
        let path: TreePath = "-1,1051".parse().unwrap();
        assert_eq!(service.get_permissions_for_path(&user, &path).letters(), "AF");
    }

    #[test]
    fn test_deepest_assignment_wins() {
        let user = editor();
        let service = InMemoryUserService::new(vec![user.clone()])
            .with_assignment(user.id, 1051, PermissionSet::from_letters("F"))
            .with_assignment(user.id, 1060, PermissionSet::from_letters("FCADU"));
        let path: TreePath = "-1,1051,1060".parse().unwrap();
        assert_eq!(service.get_permissions_for_path(&user, &path).letters(), "ACDFU");

        let shallow: TreePath = "-1,1051".parse().unwrap();
        assert_eq!(service.get_permissions_for_path(&user, &shallow).letters(), "F");
    }

    #[test]
    fn test_get_all_in_group() {
        let user = editor();
        let service = InMemoryUserService::new(vec![user]);
        assert_eq!(service.get_all_in_group(UserGroupId::new(2)).len(), 1);
        assert!(service.get_all_in_group(UserGroupId::new(9)).is_empty());
    }
}
