//! Typed ID wrappers for domain entities.
//!
//! Tree entities carry integer node IDs (the root sentinel is `-1`) plus a
//! UUID `key`; redirect URLs are keyed by UUID alone.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// The node ID of the content/media tree root.
pub const ROOT_ID: i32 = -1;

/// The node ID of the recycle bin.
pub const RECYCLE_BIN_ID: i32 = -20;

macro_rules! node_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Creates a typed ID from a raw node ID.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The tree root ID.
            #[must_use]
            pub const fn root() -> Self {
                Self(ROOT_ID)
            }

            /// Returns the raw node ID.
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }

            /// Checks whether this is the tree root.
            #[must_use]
            pub const fn is_root(self) -> bool {
                self.0 == ROOT_ID
            }

            /// Checks whether the entity has been persisted (assigned a
            /// positive node ID).
            #[must_use]
            pub const fn has_identity(self) -> bool {
                self.0 > 0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

node_id!(
    /// A strongly-typed wrapper for content node IDs.
    ContentId
);
node_id!(
    /// A strongly-typed wrapper for media node IDs.
    MediaId
);
node_id!(
    /// A strongly-typed wrapper for content type IDs.
    ContentTypeId
);
node_id!(
    /// A strongly-typed wrapper for data type IDs.
    DataTypeId
);
node_id!(
    /// A strongly-typed wrapper for template IDs.
    TemplateId
);
node_id!(
    /// A strongly-typed wrapper for member IDs.
    MemberId
);
node_id!(
    /// A strongly-typed wrapper for backoffice user IDs.
    UserId
);
node_id!(
    /// A strongly-typed wrapper for user group IDs.
    UserGroupId
);
node_id!(
    /// A strongly-typed wrapper for language IDs.
    LanguageId
);
node_id!(
    /// A strongly-typed wrapper for tag IDs.
    TagId
);

/// A strongly-typed wrapper for redirect URL IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectId(pub Uuid);

impl RedirectId {
    /// Creates a new random redirect ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a redirect ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RedirectId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RedirectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_basics() {
        let id = ContentId::new(1058);
        assert_eq!(id.value(), 1058);
        assert!(id.has_identity());
        assert!(!id.is_root());
        assert_eq!(id.to_string(), "1058");
    }

    #[test]
    fn test_root_id() {
        let root = ContentId::root();
        assert_eq!(root.value(), ROOT_ID);
        assert!(root.is_root());
        assert!(!root.has_identity());
    }

    #[test]
    fn test_unsaved_id_has_no_identity() {
        assert!(!ContentId::new(0).has_identity());
        assert!(!MediaId::new(-20).has_identity());
    }

    #[test]
    fn test_node_id_from_i32() {
        let id: UserId = 42.into();
        assert_eq!(id, UserId::new(42));
    }

    #[test]
    fn test_node_id_serde_transparent() {
        let id = TagId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let parsed: TagId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_redirect_id() {
        let a = RedirectId::new();
        let b = RedirectId::new();
        assert_ne!(a, b);
        assert_eq!(RedirectId::from_uuid(*a.as_uuid()), a);
    }
}
