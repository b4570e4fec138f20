//! Universal document identifiers.

use crate::{QuillError, QuillResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// The entity type segment of a [`Udi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UdiEntityType {
    Document,
    DocumentBlueprint,
    DocumentType,
    Media,
    MediaType,
    Member,
    MemberType,
    Template,
    DataType,
}

impl UdiEntityType {
    /// Returns the wire segment for this entity type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::DocumentBlueprint => "document-blueprint",
            Self::DocumentType => "document-type",
            Self::Media => "media",
            Self::MediaType => "media-type",
            Self::Member => "member",
            Self::MemberType => "member-type",
            Self::Template => "template",
            Self::DataType => "data-type",
        }
    }

    fn parse(segment: &str) -> Option<Self> {
        match segment {
            "document" => Some(Self::Document),
            "document-blueprint" => Some(Self::DocumentBlueprint),
            "document-type" => Some(Self::DocumentType),
            "media" => Some(Self::Media),
            "media-type" => Some(Self::MediaType),
            "member" => Some(Self::Member),
            "member-type" => Some(Self::MemberType),
            "template" => Some(Self::Template),
            "data-type" => Some(Self::DataType),
            _ => None,
        }
    }
}

/// A universal identifier for a tree entity, serialized as
/// `quill://<entity-type>/<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Udi {
    entity_type: UdiEntityType,
    key: Uuid,
}

impl Udi {
    const SCHEME: &'static str = "quill://";

    /// Creates a UDI for the given entity type and key.
    #[must_use]
    pub const fn new(entity_type: UdiEntityType, key: Uuid) -> Self {
        Self { entity_type, key }
    }

    /// Creates a document UDI.
    #[must_use]
    pub const fn document(key: Uuid) -> Self {
        Self::new(UdiEntityType::Document, key)
    }

    /// Creates a media UDI.
    #[must_use]
    pub const fn media(key: Uuid) -> Self {
        Self::new(UdiEntityType::Media, key)
    }

    /// Returns the entity type.
    #[must_use]
    pub const fn entity_type(&self) -> UdiEntityType {
        self.entity_type
    }

    /// Returns the entity key.
    #[must_use]
    pub const fn key(&self) -> &Uuid {
        &self.key
    }
}

impl Display for Udi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}",
            Self::SCHEME,
            self.entity_type.as_str(),
            self.key.simple()
        )
    }
}

impl FromStr for Udi {
    type Err = QuillError;

    fn from_str(s: &str) -> QuillResult<Self> {
        let rest = s
            .strip_prefix(Self::SCHEME)
            .ok_or_else(|| QuillError::validation(format!("Invalid UDI '{}'", s)))?;
        let (entity_type, key) = rest
            .split_once('/')
            .ok_or_else(|| QuillError::validation(format!("Invalid UDI '{}'", s)))?;
        let entity_type = UdiEntityType::parse(entity_type)
            .ok_or_else(|| QuillError::validation(format!("Unknown UDI entity type '{}'", entity_type)))?;
        let key = Uuid::parse_str(key)
            .map_err(|_| QuillError::validation(format!("Invalid UDI key '{}'", key)))?;
        Ok(Self::new(entity_type, key))
    }
}

impl From<Udi> for String {
    fn from(udi: Udi) -> Self {
        udi.to_string()
    }
}

impl TryFrom<String> for Udi {
    type Error = QuillError;

    fn try_from(value: String) -> QuillResult<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let key = Uuid::parse_str("b9e26148-3b93-4e42-a5a1-d4b2d323b2b4").unwrap();
        let udi = Udi::document(key);
        assert_eq!(
            udi.to_string(),
            "quill://document/b9e261483b934e42a5a1d4b2d323b2b4"
        );
    }

    #[test]
    fn test_round_trip() {
        let udi = Udi::new(UdiEntityType::DocumentType, Uuid::new_v4());
        let parsed: Udi = udi.to_string().parse().unwrap();
        assert_eq!(parsed, udi);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("umb://document/abc".parse::<Udi>().is_err());
        assert!("quill://widget/abc".parse::<Udi>().is_err());
        assert!("quill://document/not-a-uuid".parse::<Udi>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let udi = Udi::media(Uuid::new_v4());
        let json = serde_json::to_string(&udi).unwrap();
        assert!(json.starts_with("\"quill://media/"));
        let back: Udi = serde_json::from_str(&json).unwrap();
        assert_eq!(back, udi);
    }
}
