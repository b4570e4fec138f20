//! Domain entities of the editing backend.

pub mod audit;
pub mod content;
pub mod content_type;
pub mod language;
pub mod media;
pub mod member;
pub mod property_editor;
pub mod redirect_url;
pub mod section;
pub mod tag;
pub mod template;
pub mod user;

pub use audit::{AuditEntry, AuditType};
pub use content::{Content, ContentSavedState, Property};
pub use content_type::{AllowedContentType, ContentType, ContentTypeRef};
pub use language::Language;
pub use media::Media;
pub use member::{Member, MemberProvider};
pub use property_editor::{DataType, PropertyEditor, ValueStorageType};
pub use redirect_url::RedirectUrl;
pub use section::Section;
pub use tag::Tag;
pub use template::Template;
pub use user::{User, UserGroup, UserState};
