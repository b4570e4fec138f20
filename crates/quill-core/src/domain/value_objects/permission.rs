//! Permission letters and permission sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

/// A single granular permission, encoded as one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(pub char);

impl Permission {
    /// Browse/open a node in the tree.
    pub const BROWSE: Self = Self('F');
    /// Create a child node.
    pub const CREATE: Self = Self('C');
    /// Delete the node.
    pub const DELETE: Self = Self('D');
    /// Move the node.
    pub const MOVE: Self = Self('M');
    /// Copy the node.
    pub const COPY: Self = Self('O');
    /// Sort children.
    pub const SORT: Self = Self('S');
    /// Save changes.
    pub const UPDATE: Self = Self('A');
    /// Publish the node.
    pub const PUBLISH: Self = Self('U');
    /// Roll back to a previous version.
    pub const ROLLBACK: Self = Self('K');

    /// Creates a permission from its letter.
    #[must_use]
    pub const fn new(letter: char) -> Self {
        Self(letter)
    }

    /// Returns the permission letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered set of permission letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from a string of letters, e.g. `"FCA"`.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self(letters.chars().map(Permission::new).collect())
    }

    /// Adds a permission to the set.
    pub fn insert(&mut self, permission: Permission) {
        self.0.insert(permission);
    }

    /// Checks whether the set grants the given permission.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Checks whether no permissions are granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of granted permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the granted permissions in letter order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Returns the set as a sorted string of letters.
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|p| p.0).collect()
    }

    /// Returns the union of this set with another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letters() {
        let set = PermissionSet::from_letters("FCA");
        assert_eq!(set.len(), 3);
        assert!(set.contains(Permission::BROWSE));
        assert!(set.contains(Permission::CREATE));
        assert!(set.contains(Permission::UPDATE));
        assert!(!set.contains(Permission::DELETE));
    }

    #[test]
    fn test_letters_sorted() {
        let set = PermissionSet::from_letters("UFA");
        assert_eq!(set.letters(), "AFU");
    }

    #[test]
    fn test_empty() {
        let set = PermissionSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.letters(), "");
    }

    #[test]
    fn test_union() {
        let a = PermissionSet::from_letters("FC");
        let b = PermissionSet::from_letters("CU");
        assert_eq!(a.union(&b).letters(), "CFU");
    }

    #[test]
    fn test_duplicate_letters_collapse() {
        let set = PermissionSet::from_letters("FFF");
        assert_eq!(set.len(), 1);
    }
}
