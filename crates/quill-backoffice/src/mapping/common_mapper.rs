//! Shared lookups used by several map definitions.

use crate::models::{EntityBasic, UserProfile};
use quill_core::{QuillResult, TreeEntity, Udi, UserId};
use quill_mapper::MapperContext;
use quill_service::UserService;
use std::sync::Arc;

/// Owner/updater resolution and generic entity-to-basic mapping shared by
/// the content, media, and user definitions.
#[derive(Clone)]
pub struct CommonMapper {
    user_service: Arc<dyn UserService>,
}

impl CommonMapper {
    /// Creates the common mapper.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Resolves a user ID to the profile stamp shown on items. A deleted
    /// user yields `None` rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates nested mapping failures.
    pub fn get_user_profile(
        &self,
        id: UserId,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Option<UserProfile>> {
        match self.user_service.get_by_id(id) {
            Some(user) => context.map(&user).map(Some),
            None => Ok(None),
        }
    }

    /// Maps any tree entity to its minimal representation.
    #[must_use]
    pub fn entity_basic<E: TreeEntity>(entity: &E, udi: Option<Udi>) -> EntityBasic {
        EntityBasic {
            id: entity.node_id(),
            key: entity.key(),
            name: entity.name().to_string(),
            icon: entity.icon().unwrap_or("icon-document").to_string(),
            trashed: entity.trashed(),
            parent_id: entity.parent_id(),
            path: entity.path().to_string(),
            udi,
        }
    }
}
