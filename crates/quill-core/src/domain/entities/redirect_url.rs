//! Redirect URL entity.

use crate::domain::value_objects::Culture;
use crate::id::{ContentId, RedirectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A redirect created when a published page was moved or renamed: requests
/// for the old URL are routed to the content item it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectUrl {
    /// Redirect ID.
    pub id: RedirectId,

    /// The content item the old URL now redirects to.
    pub content_id: ContentId,

    /// The target item's UUID key.
    pub content_key: Uuid,

    /// The old URL being redirected.
    pub url: String,

    /// The culture the redirect applies to, if variant.
    pub culture: Option<Culture>,

    /// When the redirect was created.
    pub create_date_utc: DateTime<Utc>,
}

impl RedirectUrl {
    /// Creates a redirect from an old URL to a content item.
    #[must_use]
    pub fn new(content_id: ContentId, content_key: Uuid, url: impl Into<String>) -> Self {
        Self {
            id: RedirectId::new(),
            content_id,
            content_key,
            url: url.into(),
            culture: None,
            create_date_utc: Utc::now(),
        }
    }
}
