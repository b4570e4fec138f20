//! Map definitions for tags.

use crate::models::TagModel;
use quill_core::{QuillResult, Tag};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};

/// Declares how tags map to their models.
#[derive(Clone)]
pub struct TagMapDefinition;

impl TagMapDefinition {
    /// Creates the definition.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn map(source: &Tag, target: &mut TagModel, _context: &mut MapperContext<'_>) -> QuillResult<()> {
        target.id = source.id.value();
        target.text = source.text.clone();
        target.group = source.group.clone();
        target.node_count = source.node_count;
        Ok(())
    }
}

impl Default for TagMapDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDefinition for TagMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        mapper.define_with_ctor(|_source: &Tag, _context| TagModel::default(), Self::map)?;
        Ok(())
    }
}
