//! Map definitions for templates.

use crate::models::TemplateDisplay;
use quill_core::{QuillResult, Template};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};

/// Declares how templates map to their editing models.
#[derive(Clone)]
pub struct TemplateMapDefinition;

impl TemplateMapDefinition {
    /// Creates the definition.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn map_display(
        source: &Template,
        target: &mut TemplateDisplay,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.alias = source.alias.clone();
        target.name = source.name.clone();
        target.master_template_alias = source.master_template_alias.clone();
        target.is_master_template = source.is_master_template;
        target.content = source.content.clone();
        target.virtual_path = source.virtual_path();
        Ok(())
    }
}

impl Default for TemplateMapDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDefinition for TemplateMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        mapper.define_with_ctor(
            |_source: &Template, _context| TemplateDisplay::default(),
            Self::map_display,
        )?;
        Ok(())
    }
}
