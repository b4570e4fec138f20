//! Models consumed by the editing UI.

pub mod audit;
pub mod content;
pub mod content_type;
pub mod data_type;
pub mod entity_basic;
pub mod media;
pub mod member;
pub mod redirect_url;
pub mod section;
pub mod tag;
pub mod template;
pub mod user;

pub use audit::AuditEntryDisplay;
pub use content::{ContentItemBasic, ContentItemDisplay, ContentPropertyDisplay, ContentVariantDisplay};
pub use content_type::DocumentTypeDisplay;
pub use data_type::{DataTypeDisplay, DatabaseType, PropertyEditorBasic};
pub use entity_basic::EntityBasic;
pub use media::MediaItemDisplay;
pub use member::{MemberDisplay, MemberProviderFields};
pub use redirect_url::RedirectUrlDisplay;
pub use section::SectionModel;
pub use tag::TagModel;
pub use template::TemplateDisplay;
pub use user::{UserBasic, UserDisplay, UserGroupBasic, UserProfile, UserSave};
