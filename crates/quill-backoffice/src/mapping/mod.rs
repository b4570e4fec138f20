//! Map definitions for every entity family of the editing backend.

pub mod audit_map_definition;
pub mod common_mapper;
pub mod content_map_definition;
pub mod content_type_map_definition;
pub mod data_type_map_definition;
pub mod media_map_definition;
pub mod member_map_definition;
pub mod redirect_map_definition;
pub mod section_map_definition;
pub mod tag_map_definition;
pub mod template_map_definition;
pub mod user_map_definition;

pub use audit_map_definition::AuditMapDefinition;
pub use common_mapper::CommonMapper;
pub use content_map_definition::ContentMapDefinition;
pub use content_type_map_definition::ContentTypeMapDefinition;
pub use data_type_map_definition::DataTypeMapDefinition;
pub use media_map_definition::MediaMapDefinition;
pub use member_map_definition::MemberMapDefinition;
pub use redirect_map_definition::RedirectUrlMapDefinition;
pub use section_map_definition::SectionMapDefinition;
pub use tag_map_definition::TagMapDefinition;
pub use template_map_definition::TemplateMapDefinition;
pub use user_map_definition::UserMapDefinition;
