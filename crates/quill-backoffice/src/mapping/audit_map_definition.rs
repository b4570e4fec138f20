//! Map definitions for audit trail entries.

use crate::models::AuditEntryDisplay;
use quill_core::{AuditEntry, QuillResult};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::{LocalizedTextService, UserService};
use std::sync::Arc;

/// Declares how audit entries map to history rows.
#[derive(Clone)]
pub struct AuditMapDefinition {
    user_service: Arc<dyn UserService>,
    text_service: Arc<dyn LocalizedTextService>,
}

impl AuditMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>, text_service: Arc<dyn LocalizedTextService>) -> Self {
        Self {
            user_service,
            text_service,
        }
    }

    fn map_display(
        &self,
        source: &AuditEntry,
        target: &mut AuditEntryDisplay,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.user_id = source.user_id.value();
        // A deleted user still has trail rows; degrade to a placeholder
        // name instead of failing the whole history panel.
        match self.user_service.get_by_id(source.user_id) {
            Some(user) => {
                target.user_name = user.name;
                target.user_avatar = user.avatar_url;
            }
            None => {
                target.user_name = format!("User {}", source.user_id);
                target.user_avatar = None;
            }
        }
        target.log_type = self
            .text_service
            .localize("auditTrails", source.log_type.alias(), context.culture());
        target.entity_type = source.entity_type.clone();
        target.entity_id = source.entity_id;
        target.comment = source.comment.clone();
        target.parameters = source.parameters.clone();
        target.timestamp = source.timestamp;
        Ok(())
    }
}

impl MapDefinition for AuditMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &AuditEntry, _context| AuditEntryDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;
        Ok(())
    }
}
