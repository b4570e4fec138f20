//! Redirect URL management models.

use chrono::{DateTime, Utc};
use quill_core::Culture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A redirect row in the redirect URL management dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectUrlDisplay {
    /// Redirect ID.
    pub redirect_id: Uuid,
    /// The old URL being redirected.
    pub original_url: String,
    /// The resolved URL of the destination content.
    pub destination_url: String,
    /// Destination content node ID.
    pub content_id: i32,
    /// Destination content UUID key.
    pub content_key: Uuid,
    /// The culture the redirect applies to, if variant.
    pub culture: Option<Culture>,
    /// When the redirect was created.
    pub create_date_utc: DateTime<Utc>,
}

impl RedirectUrlDisplay {
    /// Creates an empty row for the mapper to populate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            redirect_id: Uuid::nil(),
            original_url: String::new(),
            destination_url: String::new(),
            content_id: 0,
            content_key: Uuid::nil(),
            culture: None,
            create_date_utc: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl Default for RedirectUrlDisplay {
    fn default() -> Self {
        Self::new()
    }
}
