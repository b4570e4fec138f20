//! Audit trail models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit trail row as shown in the item history panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryDisplay {
    /// ID of the user who performed the action.
    pub user_id: i32,
    /// Display name of the user, resolved at mapping time.
    pub user_name: String,
    /// Avatar URL of the user, if one is set.
    pub user_avatar: Option<String>,
    /// Localized label of the action.
    pub log_type: String,
    /// Affected entity type name.
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

impl AuditEntryDisplay {
    /// Creates an empty row for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_id: 0,
            user_name: String::new(),
            user_avatar: None,
            log_type: String::new(),
            entity_type: String::new(),
            entity_id: 0,
            comment: None,
            parameters: None,
            timestamp: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for AuditEntryDisplay {
    fn default() -> Self {
        Self::new()
    }
}
