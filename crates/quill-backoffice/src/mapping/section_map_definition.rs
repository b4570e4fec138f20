//! Map definitions for backoffice sections.

use crate::models::SectionModel;
use quill_core::{QuillResult, Section};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::LocalizedTextService;
use std::sync::Arc;

/// Declares how sections map to their menu models.
#[derive(Clone)]
pub struct SectionMapDefinition {
    text_service: Arc<dyn LocalizedTextService>,
}

impl SectionMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(text_service: Arc<dyn LocalizedTextService>) -> Self {
        Self { text_service }
    }

    fn map(
        &self,
        source: &Section,
        target: &mut SectionModel,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.alias = source.alias.clone();
        // An untranslated alias keeps the bracketed fallback so the UI can
        // surface the missing translation.
        target.name = self
            .text_service
            .localize("sections", &source.alias, context.culture());
        Ok(())
    }
}

impl MapDefinition for SectionMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &Section, _context| SectionModel::default(),
            move |source, target, context| this.map(source, target, context),
        )?;
        Ok(())
    }
}
