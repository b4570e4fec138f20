//! Startup composition of the backoffice mapper.

use crate::mapping::{
    AuditMapDefinition, CommonMapper, ContentMapDefinition, ContentTypeMapDefinition,
    DataTypeMapDefinition, MediaMapDefinition, MemberMapDefinition, RedirectUrlMapDefinition,
    SectionMapDefinition, TagMapDefinition, TemplateMapDefinition, UserMapDefinition,
};
use quill_config::BackofficeSettings;
use quill_core::QuillResult;
use quill_mapper::{MapDefinition, Mapper, MapperBuilder};
use quill_service::{
    ContentService, ContentTypeService, LanguageService, LocalizedTextService, MediaService,
    PropertyEditorCollection, PublishedUrlProvider, SectionService, SecurityAccessor,
    TemplateService, UserService,
};
use std::sync::Arc;
use tracing::info;

/// The collaborator services the map definitions are wired with.
///
/// Everything is passed in explicitly; no definition reaches for ambient
/// process-wide state.
#[derive(Clone)]
pub struct BackofficeServices {
    pub content: Arc<dyn ContentService>,
    pub media: Arc<dyn MediaService>,
    pub content_types: Arc<dyn ContentTypeService>,
    pub templates: Arc<dyn TemplateService>,
    pub users: Arc<dyn UserService>,
    pub languages: Arc<dyn LanguageService>,
    pub text: Arc<dyn LocalizedTextService>,
    pub sections: Arc<dyn SectionService>,
    pub urls: Arc<dyn PublishedUrlProvider>,
    pub security: Arc<dyn SecurityAccessor>,
    pub property_editors: Arc<PropertyEditorCollection>,
    pub settings: BackofficeSettings,
}

/// Registers every map definition and freezes the process-wide mapper.
///
/// Runs once at startup; the returned [`Mapper`] is immutable and safe to
/// share across request handlers.
///
/// # Errors
///
/// Returns a duplicate-definition error if two definitions claim the same
/// type pair.
pub fn build_backoffice_mapper(services: &BackofficeServices) -> QuillResult<Mapper> {
    let common_mapper = CommonMapper::new(Arc::clone(&services.users));

    let definitions: Vec<Box<dyn MapDefinition>> = vec![
        Box::new(ContentMapDefinition::new(
            common_mapper.clone(),
            Arc::clone(&services.content),
            Arc::clone(&services.content_types),
            Arc::clone(&services.templates),
            Arc::clone(&services.users),
            Arc::clone(&services.urls),
            Arc::clone(&services.security),
        )),
        Box::new(MediaMapDefinition::new(common_mapper)),
        Box::new(ContentTypeMapDefinition::new(
            Arc::clone(&services.content_types),
            services.settings.global.clone(),
        )),
        Box::new(UserMapDefinition::new(
            Arc::clone(&services.users),
            Arc::clone(&services.sections),
            Arc::clone(&services.languages),
            Arc::clone(&services.text),
            Arc::clone(&services.content),
            Arc::clone(&services.media),
            services.settings.global.clone(),
        )),
        Box::new(MemberMapDefinition::new()),
        Box::new(TagMapDefinition::new()),
        Box::new(TemplateMapDefinition::new()),
        Box::new(SectionMapDefinition::new(Arc::clone(&services.text))),
        Box::new(AuditMapDefinition::new(
            Arc::clone(&services.users),
            Arc::clone(&services.text),
        )),
        Box::new(RedirectUrlMapDefinition::new(
            Arc::clone(&services.content),
            Arc::clone(&services.urls),
        )),
        Box::new(DataTypeMapDefinition::new(Arc::clone(&services.property_editors))),
    ];

    let mut builder = MapperBuilder::new();
    for definition in &definitions {
        builder.add_definition(definition.as_ref())?;
    }

    let mapper = builder.build();
    info!(
        "Backoffice mapper composed with {} conversions",
        mapper.definition_count()
    );
    Ok(mapper)
}
