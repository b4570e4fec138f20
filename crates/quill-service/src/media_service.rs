//! Media tree lookups.

use quill_core::{Media, MediaId};
use std::collections::HashMap;

/// Point lookups into the media tree.
pub trait MediaService: Send + Sync {
    /// Fetches a media item by node ID.
    fn get_by_id(&self, id: MediaId) -> Option<Media>;

    /// Fetches the parent of a media item, or `None` at the tree root.
    fn get_parent(&self, media: &Media) -> Option<Media>;
}

/// Media service over a fixed in-memory tree.
pub struct InMemoryMediaService {
    by_id: HashMap<MediaId, Media>,
}

impl InMemoryMediaService {
    /// Builds the service from a flat list of media items.
    #[must_use]
    pub fn new(items: Vec<Media>) -> Self {
        Self {
            by_id: items.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

impl MediaService for InMemoryMediaService {
    fn get_by_id(&self, id: MediaId) -> Option<Media> {
        self.by_id.get(&id).cloned()
    }

    fn get_parent(&self, media: &Media) -> Option<Media> {
        if media.parent_id.is_root() {
            return None;
        }
        self.get_by_id(media.parent_id)
    }
}
