//! Audit trail entity.

use crate::id::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of action an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditType {
    New,
    Save,
    Open,
    Delete,
    Publish,
    Unpublish,
    Move,
    Copy,
    Sort,
    RollBack,
    System,
}

impl AuditType {
    /// The localization alias of this audit type (in the `auditTrails`
    /// area).
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Save => "save",
            Self::Open => "open",
            Self::Delete => "delete",
            Self::Publish => "publish",
            Self::Unpublish => "unpublish",
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Sort => "sort",
            Self::RollBack => "rollBack",
            Self::System => "system",
        }
    }
}

/// One entry in the audit trail of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// User who performed the action.
    pub user_id: UserId,

    /// What was done.
    pub log_type: AuditType,

    /// Affected entity type name, e.g. `"Document"`.
    pub entity_type: String,

    /// Affected node ID.
    pub entity_id: i32,

    /// Free-text comment recorded with the action.
    pub comment: Option<String>,

    /// Extra parameters recorded with the action.
    pub parameters: Option<String>,

    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates an audit entry stamped now.
    #[must_use]
    pub fn new(user_id: UserId, log_type: AuditType, entity_type: impl Into<String>, entity_id: i32) -> Self {
        Self {
            user_id,
            log_type,
            entity_type: entity_type.into(),
            entity_id,
            comment: None,
            parameters: None,
            timestamp: Utc::now(),
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
