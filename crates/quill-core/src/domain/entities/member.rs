//! Member (website account) entity.

use super::content::Property;
use crate::id::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a member's credentials live.
///
/// Local members are stored and managed by the CMS; external members come
/// from an outside identity provider and their credential fields are
/// read-only in the backoffice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MemberProvider {
    /// Credentials managed by the CMS.
    Local,
    /// Credentials managed by a named external provider.
    External {
        /// The identity provider name, e.g. `"ldap"`.
        provider_name: String,
    },
}

impl MemberProvider {
    /// Whether credential fields may be edited in the backoffice.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

/// A member account of the public website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Node ID.
    pub id: MemberId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Display name.
    pub name: String,

    /// Login name.
    pub username: String,

    /// Email address.
    pub email: String,

    /// Alias of the member type.
    pub member_type_alias: String,

    /// Which provider manages the account's credentials.
    pub provider: MemberProvider,

    /// Whether the account is approved for login.
    pub is_approved: bool,

    /// Whether the account is locked out.
    pub is_locked_out: bool,

    /// Last login timestamp.
    pub last_login_date: Option<DateTime<Utc>>,

    /// Property values defined by the member type.
    pub properties: Vec<Property>,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl Member {
    /// Creates an approved, locally-managed member.
    #[must_use]
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        member_type_alias: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            email: email.into(),
            member_type_alias: member_type_alias.into(),
            provider: MemberProvider::Local,
            is_approved: true,
            is_locked_out: false,
            last_login_date: None,
            properties: Vec::new(),
            create_date: now,
            update_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_is_local() {
        let member = Member::new(MemberId::new(4001), "Jane Doe", "jane", "jane@example.com", "standard");
        assert!(member.provider.is_local());
        assert!(member.is_approved);
    }

    #[test]
    fn test_external_provider() {
        let provider = MemberProvider::External {
            provider_name: "ldap".to_string(),
        };
        assert!(!provider.is_local());
    }
}
