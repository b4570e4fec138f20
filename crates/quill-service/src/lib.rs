//! # Quill Service
//!
//! The collaborator services the mapping layer calls while populating
//! derived fields: content/media/content-type lookups, user permissions,
//! text localization, section and property-editor registries, URL
//! resolution, and the ambient current-user accessor.
//!
//! Every interface is synchronous: conversions are fast in-memory field
//! copies plus occasional point lookups, and collaborator implementations
//! are expected to answer from memory.

pub mod content_service;
pub mod content_type_service;
pub mod language_service;
pub mod localized_text_service;
pub mod media_service;
pub mod property_editors;
pub mod section_service;
pub mod security;
pub mod template_service;
pub mod url_provider;
pub mod user_service;

pub use content_service::{ContentService, InMemoryContentService};
pub use content_type_service::{ContentTypeService, InMemoryContentTypeService};
pub use language_service::{InMemoryLanguageService, LanguageService};
pub use localized_text_service::{is_localized, InMemoryTextService, LocalizedTextService};
pub use media_service::{InMemoryMediaService, MediaService};
pub use property_editors::PropertyEditorCollection;
pub use section_service::{InMemorySectionService, SectionService};
pub use security::{FixedSecurityAccessor, SecurityAccessor};
pub use template_service::{InMemoryTemplateService, TemplateService};
pub use url_provider::{PublishedUrlProvider, RoutingUrlProvider};
pub use user_service::{InMemoryUserService, UserService};
