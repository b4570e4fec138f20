//! Member editing models.

use super::content::ContentPropertyDisplay;
use chrono::{DateTime, Utc};
use quill_core::Udi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the member editor renders credential fields, derived from the
/// membership provider managing the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProviderFields {
    /// Name of the provider managing the account.
    pub provider_name: String,
    /// Whether the login name may be edited.
    pub login_editable: bool,
    /// Whether the password can be reset from the backoffice.
    pub can_reset_password: bool,
    /// Whether the account lives in an external identity store.
    pub external: bool,
}

/// The member editor model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDisplay {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Universal identifier.
    pub udi: Option<Udi>,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Member type alias.
    pub member_type_alias: String,
    /// Whether the account is approved for login.
    pub is_approved: bool,
    /// Whether the account is locked out.
    pub is_locked_out: bool,
    /// Last login timestamp.
    pub last_login_date: Option<DateTime<Utc>>,
    /// Credential field rendering, per the membership provider.
    pub provider_fields: MemberProviderFields,
    /// The member's properties.
    pub properties: Vec<ContentPropertyDisplay>,
    /// Creation timestamp.
    pub create_date: DateTime<Utc>,
    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl MemberDisplay {
    /// Creates an empty model for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            key: Uuid::nil(),
            udi: None,
            name: String::new(),
            username: String::new(),
            email: String::new(),
            member_type_alias: String::new(),
            is_approved: false,
            is_locked_out: false,
            last_login_date: None,
            provider_fields: MemberProviderFields::default(),
            properties: Vec::new(),
            create_date: DateTime::<Utc>::MIN_UTC,
            update_date: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for MemberDisplay {
    fn default() -> Self {
        Self::new()
    }
}
