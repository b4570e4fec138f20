//! Content type lookups.

use quill_core::{ContentType, ContentTypeId, TreePath};
use std::collections::{HashMap, HashSet};

/// Lookups into the content type (document type) registry.
pub trait ContentTypeService: Send + Sync {
    /// Fetches a content type by node ID.
    fn get(&self, id: ContentTypeId) -> Option<ContentType>;

    /// Every registered content type.
    fn get_all(&self) -> Vec<ContentType>;

    /// Whether any content node along the given *content* path is of a
    /// container (list view) type.
    fn has_container_in_path(&self, path: &TreePath) -> bool;
}

/// Content type service over a fixed in-memory registry.
pub struct InMemoryContentTypeService {
    by_id: HashMap<ContentTypeId, ContentType>,
    /// Content node IDs known to be of a container type.
    container_nodes: HashSet<i32>,
}

impl InMemoryContentTypeService {
    /// Builds the service from a list of content types.
    #[must_use]
    pub fn new(types: Vec<ContentType>) -> Self {
        Self {
            by_id: types.into_iter().map(|t| (t.id, t)).collect(),
            container_nodes: HashSet::new(),
        }
    }

    /// Indexes the content nodes whose type is a container, so path checks
    /// can answer without walking the content tree.
    #[must_use]
    pub fn with_container_nodes(mut self, node_ids: impl IntoIterator<Item = i32>) -> Self {
        self.container_nodes.extend(node_ids);
        self
    }
}

impl ContentTypeService for InMemoryContentTypeService {
    fn get(&self, id: ContentTypeId) -> Option<ContentType> {
        self.by_id.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<ContentType> {
        let mut all: Vec<ContentType> = self.by_id.values().cloned().collect();
        all.sort_by_key(|t| t.id);
        all
    }

    fn has_container_in_path(&self, path: &TreePath) -> bool {
        path.ids().iter().any(|id| self.container_nodes.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_container_in_path() {
        let service = InMemoryContentTypeService::new(Vec::new()).with_container_nodes([1052]);

        let under_container: TreePath = "-1,1051,1052,1060".parse().unwrap();
        let plain: TreePath = "-1,1051".parse().unwrap();
        assert!(service.has_container_in_path(&under_container));
        assert!(!service.has_container_in_path(&plain));
    }

    #[test]
    fn test_get_all_is_ordered() {
        let service = InMemoryContentTypeService::new(vec![
            ContentType::new(ContentTypeId::new(1102), "b", "B"),
            ContentType::new(ContentTypeId::new(1101), "a", "A"),
        ]);
        let all = service.get_all();
        assert_eq!(all[0].alias, "a");
        assert_eq!(all[1].alias, "b");
    }

    #[test]
    fn test_get_by_id() {
        let service = InMemoryContentTypeService::new(vec![ContentType::new(
            ContentTypeId::new(1101),
            "page",
            "Page",
        )]);
        assert!(service.get(ContentTypeId::new(1101)).is_some());
        assert!(service.get(ContentTypeId::new(9999)).is_none());
    }
}
