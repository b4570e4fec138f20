//! Tree path value object.

use crate::id::ROOT_ID;
use crate::{QuillError, QuillResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// The comma-joined ancestor ID path of a tree entity, root first.
///
/// A persisted entity's path always starts at the root sentinel and ends
/// with the entity's own ID, e.g. `"-1,1058,1062"` for a node two levels
/// below the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(String);

impl TreePath {
    /// The path of the tree root itself.
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    /// Builds a path for a node directly below the root.
    #[must_use]
    pub fn top_level(id: i32) -> Self {
        Self(format!("{},{}", ROOT_ID, id))
    }

    /// Builds the path of a child node under this path.
    #[must_use]
    pub fn for_child(&self, id: i32) -> Self {
        Self(format!("{},{}", self.0, id))
    }

    /// Returns the raw comma-joined path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses every ID segment of the path, root sentinel included.
    #[must_use]
    pub fn ids(&self) -> Vec<i32> {
        self.0
            .split(',')
            .filter_map(|segment| segment.trim().parse::<i32>().ok())
            .collect()
    }

    /// Parses the ancestor IDs of the node: every segment except the root
    /// sentinel and the node's own trailing ID.
    #[must_use]
    pub fn ancestor_ids(&self) -> Vec<i32> {
        let ids = self.ids();
        if ids.len() <= 2 {
            return Vec::new();
        }
        ids[1..ids.len() - 1].to_vec()
    }

    /// Returns the direct parent ID, or `None` for the root path.
    #[must_use]
    pub fn parent_id(&self) -> Option<i32> {
        let ids = self.ids();
        if ids.len() < 2 {
            return None;
        }
        Some(ids[ids.len() - 2])
    }

    /// Returns the trailing ID of the path (the node's own ID).
    #[must_use]
    pub fn node_id(&self) -> Option<i32> {
        self.ids().last().copied()
    }

    /// The depth of the node below the root (the root itself is level 0).
    #[must_use]
    pub fn level(&self) -> usize {
        self.ids().len().saturating_sub(1)
    }

    /// Checks whether the path contains the given ID at any position.
    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.ids().contains(&id)
    }

    /// Checks whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.ids() == [ROOT_ID]
    }
}

impl Default for TreePath {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for TreePath {
    type Err = QuillError;

    fn from_str(s: &str) -> QuillResult<Self> {
        if s.is_empty() {
            return Err(QuillError::validation("Tree path must not be empty"));
        }
        for segment in s.split(',') {
            segment.trim().parse::<i32>().map_err(|_| {
                QuillError::validation(format!("Invalid tree path segment '{}' in '{}'", segment, s))
            })?;
        }
        Ok(Self(s.to_string()))
    }
}

impl Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let path = TreePath::root();
        assert_eq!(path.as_str(), "-1");
        assert!(path.is_root());
        assert_eq!(path.level(), 0);
        assert_eq!(path.parent_id(), None);
        assert!(path.ancestor_ids().is_empty());
    }

    #[test]
    fn test_child_paths() {
        let home = TreePath::top_level(1051);
        assert_eq!(home.as_str(), "-1,1051");
        assert_eq!(home.parent_id(), Some(-1));
        assert_eq!(home.node_id(), Some(1051));
        assert_eq!(home.level(), 1);

        let products = home.for_child(1052);
        let widget = products.for_child(1060);
        assert_eq!(widget.as_str(), "-1,1051,1052,1060");
        assert_eq!(widget.ancestor_ids(), vec![1051, 1052]);
        assert_eq!(widget.parent_id(), Some(1052));
        assert_eq!(widget.level(), 3);
    }

    #[test]
    fn test_contains() {
        let path = TreePath::top_level(1051).for_child(1052);
        assert!(path.contains(1051));
        assert!(path.contains(-1));
        assert!(!path.contains(1060));
    }

    #[test]
    fn test_parse_valid() {
        let path: TreePath = "-1,1058,1062".parse().unwrap();
        assert_eq!(path.ids(), vec![-1, 1058, 1062]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<TreePath>().is_err());
        assert!("-1,abc".parse::<TreePath>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let path = TreePath::top_level(1051);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"-1,1051\"");
    }
}
