//! Map definitions for redirect URLs.

use crate::models::RedirectUrlDisplay;
use quill_core::{QuillError, QuillResult, RedirectUrl};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::{ContentService, PublishedUrlProvider};
use std::sync::Arc;

/// Declares how redirect URLs map to dashboard rows.
#[derive(Clone)]
pub struct RedirectUrlMapDefinition {
    content_service: Arc<dyn ContentService>,
    url_provider: Arc<dyn PublishedUrlProvider>,
}

impl RedirectUrlMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(content_service: Arc<dyn ContentService>, url_provider: Arc<dyn PublishedUrlProvider>) -> Self {
        Self {
            content_service,
            url_provider,
        }
    }

    fn map_display(
        &self,
        source: &RedirectUrl,
        target: &mut RedirectUrlDisplay,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        // A redirect pointing at deleted content is a data-integrity
        // problem, not a transient condition.
        let content = self
            .content_service
            .get_by_id(source.content_id)
            .ok_or_else(|| QuillError::dangling_reference("Content", source.content_id))?;

        target.redirect_id = *source.id.as_uuid();
        target.original_url = source.url.clone();
        target.destination_url = self
            .url_provider
            .get_url(&content, source.culture.as_ref())
            .text;
        target.content_id = source.content_id.value();
        target.content_key = source.content_key;
        target.culture = source.culture.clone();
        target.create_date_utc = source.create_date_utc;
        Ok(())
    }
}

impl MapDefinition for RedirectUrlMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &RedirectUrl, _context| RedirectUrlDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;
        Ok(())
    }
}
