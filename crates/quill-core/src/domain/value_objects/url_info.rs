//! Resolved URL information for content nodes.

use super::culture::Culture;
use serde::{Deserialize, Serialize};

/// The outcome of resolving a content node's public URL: either a routable
/// URL or a human-readable message explaining why none exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInfo {
    /// The URL, or the message when `is_url` is false.
    pub text: String,
    /// Whether `text` is a routable URL.
    pub is_url: bool,
    /// The culture the URL was resolved for, if any.
    pub culture: Option<Culture>,
}

impl UrlInfo {
    /// Creates a routable URL entry.
    #[must_use]
    pub fn url(text: impl Into<String>, culture: Option<Culture>) -> Self {
        Self {
            text: text.into(),
            is_url: true,
            culture,
        }
    }

    /// Creates a non-routable message entry.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_url: false,
            culture: None,
        }
    }
}
