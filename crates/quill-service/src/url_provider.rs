//! Published URL resolution.

use crate::content_service::ContentService;
use quill_core::{Content, Culture, UrlInfo};
use std::sync::Arc;

/// Resolves the public URL of a content node.
pub trait PublishedUrlProvider: Send + Sync {
    /// Resolves the URL of `content` for a culture, or a message entry
    /// when the node has no routable URL.
    fn get_url(&self, content: &Content, culture: Option<&Culture>) -> UrlInfo;
}

/// URL provider that routes by walking ancestor names.
///
/// The URL of a node is the slugified culture names of its ancestors below
/// the site root, joined by `/`. Unpublished and trashed nodes yield a
/// message entry instead.
pub struct RoutingUrlProvider {
    content_service: Arc<dyn ContentService>,
}

impl RoutingUrlProvider {
    /// Creates the provider over the given content tree.
    #[must_use]
    pub fn new(content_service: Arc<dyn ContentService>) -> Self {
        Self { content_service }
    }

    fn slugify(name: &str) -> String {
        let mut slug = String::with_capacity(name.len());
        let mut last_was_dash = false;
        for c in name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
                last_was_dash = false;
            } else if !last_was_dash && !slug.is_empty() {
                slug.push('-');
                last_was_dash = true;
            }
        }
        if slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

impl PublishedUrlProvider for RoutingUrlProvider {
    fn get_url(&self, content: &Content, culture: Option<&Culture>) -> UrlInfo {
        if content.trashed {
            return UrlInfo::message("Item is in the recycle bin");
        }
        if !content.published {
            return UrlInfo::message("Item is not published");
        }

        // Walk up to the site root, collecting slugs. The top-level node
        // is the site root and does not contribute a segment.
        let mut segments = Vec::new();
        let mut current = content.clone();
        loop {
            match self.content_service.get_parent(&current) {
                Some(parent) => {
                    segments.push(Self::slugify(current.name_for_culture(culture)));
                    current = parent;
                }
                None => break,
            }
        }
        segments.reverse();

        let url = if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", segments.join("/"))
        };
        UrlInfo::url(url, culture.cloned())
    }
}
