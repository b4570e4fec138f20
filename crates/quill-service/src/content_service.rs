//! Content tree lookups.

use quill_core::{Content, ContentId};
use std::collections::HashMap;

/// Point lookups into the content tree.
///
/// Conversions call this synchronously while populating derived fields
/// (parent checks, redirect destinations); implementations must be cheap
/// in-memory reads.
pub trait ContentService: Send + Sync {
    /// Fetches a content item by node ID.
    fn get_by_id(&self, id: ContentId) -> Option<Content>;

    /// Fetches the parent of a content item, or `None` at the tree root.
    fn get_parent(&self, content: &Content) -> Option<Content>;

    /// Whether the item has children.
    fn has_children(&self, id: ContentId) -> bool;
}

/// Content service over a fixed in-memory tree, built once and read-only
/// thereafter.
pub struct InMemoryContentService {
    by_id: HashMap<ContentId, Content>,
}

impl InMemoryContentService {
    /// Builds the service from a flat list of content items.
    #[must_use]
    pub fn new(items: Vec<Content>) -> Self {
        Self {
            by_id: items.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl ContentService for InMemoryContentService {
    fn get_by_id(&self, id: ContentId) -> Option<Content> {
        self.by_id.get(&id).cloned()
    }

    fn get_parent(&self, content: &Content) -> Option<Content> {
        if content.parent_id.is_root() {
            return None;
        }
        self.get_by_id(content.parent_id)
    }

    fn has_children(&self, id: ContentId) -> bool {
        self.by_id.values().any(|c| c.parent_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{ContentType, ContentTypeId, ContentTypeRef, TreePath, UserId};

    fn fixture() -> InMemoryContentService {
        let page = ContentTypeRef::from(&ContentType::new(ContentTypeId::new(1100), "page", "Page"));
        let home = Content::new(
            ContentId::new(1051),
            "Home",
            page.clone(),
            ContentId::root(),
            &TreePath::root(),
            UserId::new(1),
        );
        let products = Content::new(
            ContentId::new(1052),
            "Products",
            page,
            home.id,
            &home.path,
            UserId::new(1),
        );
        InMemoryContentService::new(vec![home, products])
    }

    #[test]
    fn test_get_by_id() {
        let service = fixture();
        assert!(service.get_by_id(ContentId::new(1051)).is_some());
        assert!(service.get_by_id(ContentId::new(9999)).is_none());
    }

    #[test]
    fn test_get_parent() {
        let service = fixture();
        let products = service.get_by_id(ContentId::new(1052)).unwrap();
        let parent = service.get_parent(&products).unwrap();
        assert_eq!(parent.id, ContentId::new(1051));

        let home = service.get_by_id(ContentId::new(1051)).unwrap();
        assert!(service.get_parent(&home).is_none());
    }

    #[test]
    fn test_has_children() {
        let service = fixture();
        assert!(service.has_children(ContentId::new(1051)));
        assert!(!service.has_children(ContentId::new(1052)));
    }
}
