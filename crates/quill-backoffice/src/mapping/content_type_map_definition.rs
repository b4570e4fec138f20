//! Map definitions for document types.

use crate::models::DocumentTypeDisplay;
use quill_config::GlobalSettings;
use quill_core::{ContentType, QuillResult, Udi, UdiEntityType};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::ContentTypeService;
use std::sync::Arc;

/// Declares how document types map to their editing models.
#[derive(Clone)]
pub struct ContentTypeMapDefinition {
    content_type_service: Arc<dyn ContentTypeService>,
    settings: GlobalSettings,
}

impl ContentTypeMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(content_type_service: Arc<dyn ContentTypeService>, settings: GlobalSettings) -> Self {
        Self {
            content_type_service,
            settings,
        }
    }

    fn map_display(
        &self,
        source: &ContentType,
        target: &mut DocumentTypeDisplay,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.udi = Some(Udi::new(UdiEntityType::DocumentType, source.key));
        target.alias = source.alias.clone();
        target.name = source.name.clone();
        target.description = source.description.clone();
        target.icon = source.icon.clone();
        target.thumbnail = source.thumbnail.clone();
        target.thumbnail_file_path = format!(
            "{}/images/thumbnails/{}",
            self.settings.backoffice_path, source.thumbnail
        );
        target.parent_id = source.parent_id.value();
        target.path = source.path.to_string();
        target.allowed_as_root = source.allowed_as_root;
        target.is_container = source.is_container;
        target.is_element = source.is_element;

        let mut allowed = source.allowed_content_types.clone();
        allowed.sort_by_key(|a| a.sort_order);
        target.allowed_content_types = allowed.iter().map(|a| a.id.value()).collect();

        target.composite_content_types = source.composition_aliases.clone();
        target.locked_composite_content_types = self.map_locked_compositions(source);
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        Ok(())
    }

    /// Compositions inherited through the parent chain cannot be removed
    /// on this type: collect the ordered aliases of every ancestor type.
    fn map_locked_compositions(&self, source: &ContentType) -> Vec<String> {
        if source.parent_id.is_root() {
            return Vec::new();
        }
        let Some(parent) = self.content_type_service.get(source.parent_id) else {
            return Vec::new();
        };

        let all_types = self.content_type_service.get_all();
        let mut aliases: Vec<String> = parent
            .path
            .ids()
            .iter()
            .filter_map(|ancestor_id| {
                all_types
                    .iter()
                    .find(|t| t.id.value() == *ancestor_id)
                    .map(|t| t.alias.clone())
            })
            .collect();
        aliases.sort();
        aliases
    }
}

impl MapDefinition for ContentTypeMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &ContentType, _context| DocumentTypeDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;
        Ok(())
    }
}
