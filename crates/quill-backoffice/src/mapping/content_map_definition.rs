//! Map definitions for content items.

use crate::mapping::common_mapper::CommonMapper;
use crate::models::{
    ContentItemBasic, ContentItemDisplay, ContentPropertyDisplay, ContentVariantDisplay,
    EntityBasic,
};
use quill_core::{
    Content, PermissionSet, Property, QuillError, QuillResult, TreePath, Udi, UrlInfo,
};
use quill_mapper::{MapDefinition, MapperBuilder, MapperContext};
use quill_service::{
    ContentService, ContentTypeService, PublishedUrlProvider, SecurityAccessor, TemplateService,
    UserService,
};
use std::sync::Arc;

/// Declares how content items map to their editing models.
#[derive(Clone)]
pub struct ContentMapDefinition {
    common_mapper: CommonMapper,
    content_service: Arc<dyn ContentService>,
    content_type_service: Arc<dyn ContentTypeService>,
    template_service: Arc<dyn TemplateService>,
    user_service: Arc<dyn UserService>,
    url_provider: Arc<dyn PublishedUrlProvider>,
    security_accessor: Arc<dyn SecurityAccessor>,
}

impl ContentMapDefinition {
    /// Creates the definition with its collaborators.
    #[must_use]
    pub fn new(
        common_mapper: CommonMapper,
        content_service: Arc<dyn ContentService>,
        content_type_service: Arc<dyn ContentTypeService>,
        template_service: Arc<dyn TemplateService>,
        user_service: Arc<dyn UserService>,
        url_provider: Arc<dyn PublishedUrlProvider>,
        security_accessor: Arc<dyn SecurityAccessor>,
    ) -> Self {
        Self {
            common_mapper,
            content_service,
            content_type_service,
            template_service,
            user_service,
            url_provider,
            security_accessor,
        }
    }

    fn map_display(
        &self,
        source: &Content,
        target: &mut ContentItemDisplay,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        // The allowed-actions and list-view checks both need the parent,
        // so fetch it once here.
        let parent = self.content_service.get_parent(source);

        target.id = source.id.value();
        target.key = source.key;
        target.udi = Some(Udi::document(source.key));
        target.name = source.name_for_culture(context.culture()).to_string();
        target.content_type_id = source.content_type.id.value();
        target.content_type_alias = source.content_type.alias.clone();
        target.content_type_name = source.content_type.name.clone();
        target.icon = source.content_type.icon.clone();
        target.is_container = source.content_type.is_container;
        target.is_element = source.content_type.is_element;
        target.is_child_of_list_view = self.is_child_of_list_view(parent.as_ref());
        target.trashed = source.trashed;
        target.parent_id = source.parent_id.value();
        target.path = source.path.to_string();
        target.sort_order = source.sort_order;
        target.template_alias = self.get_template_alias(source)?;
        target.owner = self.common_mapper.get_user_profile(source.creator_id, context)?;
        target.updater = self.common_mapper.get_user_profile(source.writer_id, context)?;
        target.allowed_actions = self
            .get_allowed_actions(source, parent.as_ref(), context)
            .iter()
            .map(|p| p.to_string())
            .collect();
        target.urls = self.get_urls(source, context);
        target.properties = Self::map_properties(source, context)?;
        target.create_date = source.create_date;
        target.update_date = source.update_date;

        // Variants last: per-variant mapping sets the context culture and
        // the write stays visible for the rest of the tree.
        target.variants = self.map_variants(source, context)?;
        Ok(())
    }

    fn map_basic(
        &self,
        source: &Content,
        target: &mut ContentItemBasic,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.id = source.id.value();
        target.key = source.key;
        target.udi = Some(Udi::document(source.key));
        target.name = source.name_for_culture(context.culture()).to_string();
        target.content_type_alias = source.content_type.alias.clone();
        target.icon = source.content_type.icon.clone();
        target.parent_id = source.parent_id.value();
        target.path = source.path.to_string();
        target.sort_order = source.sort_order;
        target.state = source.saved_state();
        target.varies_by_culture = source.varies_by_culture();
        target.owner = self.common_mapper.get_user_profile(source.creator_id, context)?;
        target.updater = self.common_mapper.get_user_profile(source.writer_id, context)?;
        target.properties = Self::map_properties(source, context)?;
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        Ok(())
    }

    fn map_variant(
        source: &Content,
        target: &mut ContentVariantDisplay,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        let culture = context.culture().cloned().filter(|_| source.varies_by_culture());
        target.name = source.name_for_culture(culture.as_ref()).to_string();
        target.display_name = match &culture {
            Some(culture) => format!("{} ({})", target.name, culture),
            None => target.name.clone(),
        };
        target.culture = culture;
        target.state = source.saved_state();
        target.create_date = source.create_date;
        target.update_date = source.update_date;
        target.publish_date = source.publish_date;
        Ok(())
    }

    fn map_property(
        source: &Property,
        target: &mut ContentPropertyDisplay,
        _context: &mut MapperContext<'_>,
    ) -> QuillResult<()> {
        target.alias = source.alias.clone();
        target.label = source.alias.clone();
        target.description = None;
        target.value = source.value.clone();
        target.editor = source.editor_alias.clone();
        Ok(())
    }

    /// Maps the item's properties, honoring the context's allow-list.
    fn map_properties(
        source: &Content,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Vec<ContentPropertyDisplay>> {
        let included: Vec<&Property> = source
            .properties
            .iter()
            .filter(|p| context.is_property_included(&p.alias))
            .collect();
        context.map_iter(included)
    }

    /// One variant per configured culture for variant content, a single
    /// invariant entry otherwise.
    fn map_variants(
        &self,
        source: &Content,
        context: &mut MapperContext<'_>,
    ) -> QuillResult<Vec<ContentVariantDisplay>> {
        if !source.varies_by_culture() || source.culture_names.is_empty() {
            return Ok(vec![context.map(source)?]);
        }

        let cultures: Vec<_> = source.culture_names.keys().cloned().collect();
        let mut variants = Vec::with_capacity(cultures.len());
        for culture in cultures {
            context.set_culture(culture);
            variants.push(context.map(source)?);
        }
        Ok(variants)
    }

    /// The permission letters the current user holds on the item. No
    /// ambient user means no permissions, not an error.
    fn get_allowed_actions(
        &self,
        source: &Content,
        parent: Option<&Content>,
        context: &MapperContext<'_>,
    ) -> PermissionSet {
        let current_user = context
            .current_user()
            .cloned()
            .or_else(|| self.security_accessor.current_user());
        let Some(user) = current_user else {
            return PermissionSet::empty();
        };

        // Unsaved content inherits the parent's path for the check.
        let path = if source.has_identity() {
            source.path.clone()
        } else {
            parent.map_or_else(TreePath::root, |p| p.path.clone())
        };

        self.user_service.get_permissions_for_path(&user, &path)
    }

    fn get_urls(&self, source: &Content, context: &MapperContext<'_>) -> Vec<UrlInfo> {
        if source.content_type.is_element {
            return Vec::new();
        }
        if source.varies_by_culture() && !source.culture_names.is_empty() {
            source
                .culture_names
                .keys()
                .map(|culture| self.url_provider.get_url(source, Some(culture)))
                .collect()
        } else {
            vec![self.url_provider.get_url(source, context.culture())]
        }
    }

    fn get_template_alias(&self, source: &Content) -> QuillResult<Option<String>> {
        let Some(template_id) = source.template_id else {
            return Ok(None);
        };
        let template = self
            .template_service
            .get_by_id(template_id)
            .ok_or_else(|| QuillError::dangling_reference("Template", template_id))?;
        Ok(Some(template.alias))
    }

    fn is_child_of_list_view(&self, parent: Option<&Content>) -> bool {
        parent.map_or(false, |parent| {
            parent.content_type.is_container
                || self.content_type_service.has_container_in_path(&parent.path)
        })
    }
}

impl MapDefinition for ContentMapDefinition {
    fn define_maps(&self, mapper: &mut MapperBuilder) -> QuillResult<()> {
        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &Content, _context| ContentItemDisplay::new(),
            move |source, target, context| this.map_display(source, target, context),
        )?;

        let this = self.clone();
        mapper.define_with_ctor(
            |_source: &Content, _context| ContentItemBasic::new(),
            move |source, target, context| this.map_basic(source, target, context),
        )?;

        mapper.define_with_ctor(
            |_source: &Content, _context| ContentVariantDisplay::new(),
            Self::map_variant,
        )?;

        mapper.define_with_ctor(
            |_source: &Property, _context| ContentPropertyDisplay::default(),
            Self::map_property,
        )?;

        mapper.define_with_ctor(
            |_source: &Content, _context| EntityBasic::default(),
            |source, target: &mut EntityBasic, _context| {
                *target = CommonMapper::entity_basic(source, Some(Udi::document(source.key)));
                Ok(())
            },
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use quill_core::{ContentId, ContentType, ContentTypeId, ContentTypeRef, Culture, Template, TemplateId, User, UserId};
    use quill_mapper::MapperBuilder;
    use quill_service::FixedSecurityAccessor;

    mock! {
        ContentSvc {}
        impl ContentService for ContentSvc {
            fn get_by_id(&self, id: ContentId) -> Option<Content>;
            fn get_parent(&self, content: &Content) -> Option<Content>;
            fn has_children(&self, id: ContentId) -> bool;
        }
    }

    mock! {
        ContentTypeSvc {}
        impl ContentTypeService for ContentTypeSvc {
            fn get(&self, id: ContentTypeId) -> Option<ContentType>;
            fn get_all(&self) -> Vec<ContentType>;
            fn has_container_in_path(&self, path: &TreePath) -> bool;
        }
    }

    mock! {
        TemplateSvc {}
        impl TemplateService for TemplateSvc {
            fn get_by_id(&self, id: TemplateId) -> Option<Template>;
            fn get_by_alias(&self, alias: &str) -> Option<Template>;
        }
    }

    mock! {
        UserSvc {}
        impl UserService for UserSvc {
            fn get_by_id(&self, id: UserId) -> Option<User>;
            fn get_permissions_for_path(&self, user: &User, path: &TreePath) -> PermissionSet;
            fn get_all_in_group(&self, group_id: quill_core::UserGroupId) -> Vec<User>;
        }
    }

    struct NoUrls;

    impl PublishedUrlProvider for NoUrls {
        fn get_url(&self, _content: &Content, _culture: Option<&Culture>) -> UrlInfo {
            UrlInfo::message("no routing in unit tests")
        }
    }

    fn sample_user() -> User {
        User::new(UserId::new(7), "Ed", "ed", "ed@example.com", Culture::new("en-US"))
    }

    fn sample_content(id: i32) -> Content {
        let page = ContentType::new(ContentTypeId::new(1100), "page", "Page");
        Content::new(
            ContentId::new(id),
            "Home",
            ContentTypeRef::from(&page),
            ContentId::root(),
            &TreePath::root(),
            UserId::new(1),
        )
    }

    fn definition(
        users: MockUserSvc,
        templates: MockTemplateSvc,
        security: FixedSecurityAccessor,
    ) -> ContentMapDefinition {
        let users: Arc<dyn UserService> = Arc::new(users);
        ContentMapDefinition::new(
            CommonMapper::new(Arc::clone(&users)),
            Arc::new(MockContentSvc::new()),
            Arc::new(MockContentTypeSvc::new()),
            Arc::new(templates),
            users,
            Arc::new(NoUrls),
            Arc::new(security),
        )
    }

    #[test]
    fn test_no_current_user_yields_empty_actions() {
        let mut users = MockUserSvc::new();
        users.expect_get_permissions_for_path().never();
        let definition = definition(users, MockTemplateSvc::new(), FixedSecurityAccessor::anonymous());

        let mapper = MapperBuilder::new().build();
        let context = quill_mapper::MapperContext::new(&mapper);
        let actions = definition.get_allowed_actions(&sample_content(1051), None, &context);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_unsaved_content_checks_permissions_on_the_parent_path() {
        let mut users = MockUserSvc::new();
        users
            .expect_get_permissions_for_path()
            .withf(|_user, path| path.as_str() == "-1,1051")
            .times(1)
            .returning(|_, _| PermissionSet::from_letters("F"));
        let definition = definition(
            users,
            MockTemplateSvc::new(),
            FixedSecurityAccessor::for_user(sample_user()),
        );

        let parent = sample_content(1051);
        let unsaved = sample_content(0);
        let mapper = MapperBuilder::new().build();
        let context = quill_mapper::MapperContext::new(&mapper);
        let actions = definition.get_allowed_actions(&unsaved, Some(&parent), &context);
        assert_eq!(actions.letters(), "F");
    }

    #[test]
    fn test_dangling_template_reference_fails() {
        let mut templates = MockTemplateSvc::new();
        templates.expect_get_by_id().returning(|_| None);
        let definition = definition(MockUserSvc::new(), templates, FixedSecurityAccessor::anonymous());

        let mut content = sample_content(1051);
        content.template_id = Some(TemplateId::new(3001));
        let err = definition.get_template_alias(&content).unwrap_err();
        assert_eq!(err.error_code(), "DANGLING_REFERENCE");
    }
}
