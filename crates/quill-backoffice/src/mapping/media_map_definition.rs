//! Map definitions for media items.

use crate::mapping::common_mapper::CommonMapper;
use crate::models::{EntityBasic, MediaItemDisplay};
use quill_core::{Media, Property, QuillResult, Udi};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};

/// Declares how media items map to their editing models.
#[derive(Clone)]
pub struct MediaMapDefinition {
    common_mapper: CommonMapper,
}

impl MediaMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(common_mapper: CommonMapper) -> Self {
        Self { common_mapper }
    }

    fn map_display(
        &self,
        source: &Media,
        target: &mut MediaItemDisplay,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.udi = Some(Udi::media(source.key));
        target.name = source.name.clone();
        target.media_type_alias = source.content_type.alias.clone();
        target.icon = source.content_type.icon.clone();
        target.parent_id = source.parent_id.value();
        target.path = source.path.to_string();
        target.sort_order = source.sort_order;
        target.trashed = source.trashed;
        target.owner = self.common_mapper.get_user_profile(source.creator_id, context)?;
        let included: Vec<&Property> = source
            .properties
            .iter()
            .filter(|p| context.is_property_included(&p.alias))
            .collect();
        target.properties = context.map_iter(included)?;
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        Ok(())
    }
}

impl MapDefinition for MediaMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &Media, _context| MediaItemDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;

        mapper.define_with_ctor(
            |_source: &Media, _context| EntityBasic::default(),
            |source, target: &mut EntityBasic, _context| {
                *target = CommonMapper::entity_basic(source, Some(Udi::media(source.key)));
                Ok(())
            },
        )?;

        Ok(())
    }
}
