//! Map definitions for backoffice users and user groups.

use crate::models::{EntityBasic, UserBasic, UserDisplay, UserGroupBasic, UserProfile, UserSave};
use quill_config::GlobalSettings;
use quill_core::{Culture, QuillResult, User, UserGroup};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::{
    ContentService, LanguageService, LocalizedTextService, MediaService, SectionService, UserService,
};
use std::sync::Arc;

/// Declares how users and user groups map to their editing models.
#[derive(Clone)]
pub struct UserMapDefinition {
    user_service: Arc<dyn UserService>,
    section_service: Arc<dyn SectionService>,
    language_service: Arc<dyn LanguageService>,
    text_service: Arc<dyn LocalizedTextService>,
    content_service: Arc<dyn ContentService>,
    media_service: Arc<dyn MediaService>,
    settings: GlobalSettings,
}

impl UserMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(
        user_service: Arc<dyn UserService>,
        section_service: Arc<dyn SectionService>,
        language_service: Arc<dyn LanguageService>,
        text_service: Arc<dyn LocalizedTextService>,
        content_service: Arc<dyn ContentService>,
        media_service: Arc<dyn MediaService>,
        settings: GlobalSettings,
    ) -> Self {
        Self {
            user_service,
            section_service,
            language_service,
            text_service,
            content_service,
            media_service,
            settings,
        }
    }

    fn resolved_culture(&self, source: &User) -> String {
        let culture = source.language.as_str();
        if culture.is_empty() {
            self.settings.default_ui_culture.clone()
        } else {
            culture.to_string()
        }
    }

    fn map_profile(source: &User, target: &mut UserProfile, _context: &mut MapperContext<'_>) -> QuillResult<()> {
        target.user_id = source.id.value();
        target.name = source.name.clone();
        Ok(())
    }

    fn map_basic(&self, source: &User, target: &mut UserBasic, _context: &mut MapperContext<'_>) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.name = source.name.clone();
        target.username = source.username.clone();
        target.email = source.email.clone();
        target.culture = self.resolved_culture(source);
        target.user_state = source.user_state;
        target.avatar_url = source.avatar_url.clone();
        target.last_login_date = source.last_login_date;
        Ok(())
    }

    fn map_display(&self, source: &User, target: &mut UserDisplay, context: &mut MapperContext<'_>) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.name = source.name.clone();
        target.username = source.username.clone();
        target.email = source.email.clone();
        target.culture = self.resolved_culture(source);
        target.user_state = source.user_state;
        target.avatar_url = source.avatar_url.clone();
        target.available_cultures = self
            .language_service
            .get_all()
            .into_iter()
            .map(|l| (l.iso_code.to_string(), l.culture_name))
            .collect();
        target.user_groups = context.map_iter(source.groups.iter())?;
        target.start_content_ids = self.get_content_start_nodes(source, context)?;
        target.start_media_ids = self.get_media_start_nodes(source, context)?;
        target.failed_password_attempts = source.failed_password_attempts;
        target.last_login_date = source.last_login_date;
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        Ok(())
    }

    fn map_group_basic(
        &self,
        source: &UserGroup,
        target: &mut UserGroupBasic,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.alias = source.alias.clone();
        target.name = source.name.clone();
        target.icon = if source.icon.trim().is_empty() {
            "icon-users".to_string()
        } else {
            source.icon.clone()
        };
        target.user_count = self.user_service.get_all_in_group(source.id).len();

        let allowed = &source.allowed_sections;
        let sections: Vec<_> = self
            .section_service
            .get_sections()
            .into_iter()
            .filter(|s| allowed.contains(&s.alias))
            .collect();
        target.sections = context.map_iter(sections.iter())?;

        target.content_start_node = match source.start_content_id {
            Some(id) => {
                let content = self.content_service.get_by_id(id);
                context.map_opt(content.as_ref())?
            }
            None => Some(EntityBasic::root_node(self.text_service.localize(
                "content",
                "contentRoot",
                context.culture(),
            ))),
        };
        target.media_start_node = match source.start_media_id {
            Some(id) => {
                let media = self.media_service.get_by_id(id);
                context.map_opt(media.as_ref())?
            }
            None => Some(EntityBasic::root_node(self.text_service.localize(
                "media",
                "mediaRoot",
                context.culture(),
            ))),
        };
        Ok(())
    }

    /// Applies inbound user edits onto an existing user instance.
    fn map_save(source: &UserSave, target: &mut User, _context: &mut MapperContext<'_>) -> QuillResult<()> {
        target.name = source.name.clone();
        target.email = source.email.clone();
        target.username = source.username.clone();
        target.language = Culture::new(source.culture.clone());
        Ok(())
    }

    /// Resolves a user's content start nodes: the root nodes of every
    /// group restriction, or a labelled tree root when unrestricted.
    fn get_content_start_nodes(
        &self,
        source: &User,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Vec<EntityBasic>> {
        let mut start_ids: Vec<_> = source.groups.iter().filter_map(|g| g.start_content_id).collect();
        start_ids.sort();
        start_ids.dedup();

        if start_ids.is_empty() {
            let name = self
                .text_service
                .localize("content", "contentRoot", context.culture());
            return Ok(vec![EntityBasic::root_node(name)]);
        }

        let mut nodes = Vec::with_capacity(start_ids.len());
        for id in start_ids {
            let content = self.content_service.get_by_id(id);
            if let Some(node) = context.map_opt(content.as_ref())? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn get_media_start_nodes(
        &self,
        source: &User,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Vec<EntityBasic>> {
        let mut start_ids: Vec<_> = source.groups.iter().filter_map(|g| g.start_media_id).collect();
        start_ids.sort();
        start_ids.dedup();

        if start_ids.is_empty() {
            let name = self
                .text_service
                .localize("media", "mediaRoot", context.culture());
            return Ok(vec![EntityBasic::root_node(name)]);
        }

        let mut nodes = Vec::with_capacity(start_ids.len());
        for id in start_ids {
            let media = self.media_service.get_by_id(id);
            if let Some(node) = context.map_opt(media.as_ref())? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }
}

impl MapDefinition for UserMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        mapper.define_with_ctor(
            |_source: &User, _context| UserProfile::default(),
            Self::map_profile,
        )?;

        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &User, _context| UserBasic::default(),
            move |source, target, context| this.map_basic(source, target, context),
        )?;

        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &User, _context| UserDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;

        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &UserGroup, _context| UserGroupBasic::default(),
            move |source, target, context| this.map_group_basic(source, target, context),
        )?;

        // Merging a save model into an existing user never creates one, so
        // only the in-place form exists.
        mapper.define(Self::map_save)?;

        Ok(())
    }
}
