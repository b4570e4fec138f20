//! Shared fixtures for mapping integration tests.
//!
//! Builds a small content tree, a type hierarchy with compositions, users,
//! languages, translations, and the composed backoffice mapper over them.

use quill_backoffice::{build_backoffice_mapper, BackofficeServices};
use quill_config::BackofficeSettings;
use quill_core::{
    AuditEntry, AuditType, Content, ContentId, ContentType, ContentTypeId, ContentTypeRef, Culture,
    DataType, DataTypeId, Language, LanguageId, Member, MemberId, PermissionSet, Property,
    PropertyEditor, RedirectUrl, Section, Tag, TagId, Template, TemplateId, TreePath, User,
    UserGroup, UserGroupId, UserId, ValueStorageType,
};
use quill_mapper::Mapper;
use quill_service::{
    FixedSecurityAccessor, InMemoryContentService, InMemoryContentTypeService,
    InMemoryLanguageService, InMemoryMediaService, InMemorySectionService, InMemoryTemplateService,
    InMemoryTextService, InMemoryUserService, PropertyEditorCollection, RoutingUrlProvider,
};
use std::sync::Arc;

pub struct Fixture {
    pub mapper: Mapper,
    pub editor: User,
    pub admin: User,
    pub home: Content,
    pub products: Content,
    pub widget: Content,
    pub article_type: ContentType,
    pub redirect: RedirectUrl,
    pub dangling_redirect: RedirectUrl,
}

fn published(mut content: Content) -> Content {
    content.published = true;
    content.edited = false;
    content
}

fn page_type() -> ContentType {
    let mut page = ContentType::new(ContentTypeId::new(1100), "page", "Page");
    page.varies_by_culture = true;
    page
}

fn list_type() -> ContentType {
    let mut list = ContentType::new(ContentTypeId::new(1101), "productList", "Product List");
    list.is_container = true;
    list.varies_by_culture = true;
    list
}

/// basePage <- articleList <- article, for locked-composition checks.
fn article_type_chain() -> (ContentType, ContentType, ContentType) {
    let mut base = ContentType::new(ContentTypeId::new(1110), "basePage", "Base Page");
    base.composition_aliases = vec!["seoMeta".to_string()];

    let mut list = ContentType::new(ContentTypeId::new(1111), "articleList", "Article List");
    list.parent_id = base.id;
    list.path = base.path.for_child(1111);

    let mut article = ContentType::new(ContentTypeId::new(1112), "article", "Article");
    article.parent_id = list.id;
    article.path = list.path.for_child(1112);
    article.composition_aliases = vec!["seoMeta".to_string()];

    (base, list, article)
}

fn editor_user() -> User {
    let mut group = UserGroup::new(UserGroupId::new(2), "editor", "Editors");
    group.permissions = PermissionSet::from_letters("FA");
    group.allowed_sections = vec!["content".to_string(), "settings".to_string()];
    group.start_content_id = Some(ContentId::new(1052));

    let mut user = User::new(
        UserId::new(7),
        "Ed Editor",
        "ed",
        "ed@example.com",
        Culture::new("en-US"),
    );
    user.groups = vec![group];
    user
}

fn admin_user() -> User {
    let mut group = UserGroup::new(UserGroupId::new(1), "admin", "Administrators");
    group.permissions = PermissionSet::from_letters("ACDFMU");
    group.allowed_sections = vec!["content".to_string(), "media".to_string(), "settings".to_string()];

    let mut user = User::new(
        UserId::new(1),
        "Ann Admin",
        "ann",
        "ann@example.com",
        Culture::new("en-US"),
    );
    user.groups = vec![group];
    user
}

fn content_tree(creator: UserId) -> (Content, Content, Content) {
    let page = ContentTypeRef::from(&page_type());
    let list = ContentTypeRef::from(&list_type());

    let mut home = published(Content::new(
        ContentId::new(1051),
        "Home",
        page.clone(),
        ContentId::root(),
        &TreePath::root(),
        creator,
    ));
    home.culture_names.insert(Culture::new("en-US"), "Home".to_string());
    home.culture_names.insert(Culture::new("da-DK"), "Hjem".to_string());

    let mut products = published(Content::new(
        ContentId::new(1052),
        "Products",
        list,
        home.id,
        &home.path,
        creator,
    ));
    products.culture_names.insert(Culture::new("en-US"), "Products".to_string());
    products.culture_names.insert(Culture::new("da-DK"), "Produkter".to_string());

    let mut widget = published(Content::new(
        ContentId::new(1060),
        "Blue Widget",
        page,
        products.id,
        &products.path,
        creator,
    ));
    widget.culture_names.insert(Culture::new("en-US"), "Blue Widget".to_string());
    widget.culture_names.insert(Culture::new("da-DK"), "Blå Widget".to_string());
    widget.template_id = Some(TemplateId::new(3001));
    widget.properties = vec![
        Property::new("bodyText", "Quill.RichText", serde_json::json!("<p>hello</p>")),
        Property::new("price", "Quill.TextBox", serde_json::json!("49.95")),
    ];

    (home, products, widget)
}

pub fn sample_tag() -> Tag {
    let mut tag = Tag::new(TagId::new(5), "blue", "colors");
    tag.node_count = 3;
    tag
}

pub fn sample_member() -> Member {
    Member::new(MemberId::new(4001), "Jane Doe", "jane", "jane@example.com", "standard")
}

pub fn sample_audit_entry() -> AuditEntry {
    AuditEntry::new(UserId::new(1), AuditType::Save, "Document", 1060).with_comment("Saved by editor")
}

pub fn sample_data_type() -> DataType {
    DataType::new(DataTypeId::new(5001), "Body Text", "Quill.RichText")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds the composed mapper with the given current user (or none).
pub fn fixture_with_user(current_user: Option<User>) -> Fixture {
    init_tracing();
    let editor = editor_user();
    let admin = admin_user();
    let (home, products, widget) = content_tree(admin.id);
    let (base_type, article_list_type, article_type) = article_type_chain();

    let content_service = Arc::new(InMemoryContentService::new(vec![
        home.clone(),
        products.clone(),
        widget.clone(),
    ]));

    let content_type_service = Arc::new(
        InMemoryContentTypeService::new(vec![
            page_type(),
            list_type(),
            base_type,
            article_list_type,
            article_type.clone(),
        ])
        // "Products" is rendered as a list view.
        .with_container_nodes([1052]),
    );

    let template_service = Arc::new(InMemoryTemplateService::new(vec![Template::new(
        TemplateId::new(3001),
        "article",
        "Article Page",
    )]));

    let user_service = Arc::new(InMemoryUserService::new(vec![editor.clone(), admin.clone()]));

    let language_service = Arc::new(InMemoryLanguageService::new(vec![
        {
            let mut english = Language::new(LanguageId::new(1), Culture::new("en-US"), "English (United States)");
            english.is_default = true;
            english
        },
        Language::new(LanguageId::new(2), Culture::new("da-DK"), "Danish (Denmark)"),
    ]));

    let text_service = Arc::new(
        InMemoryTextService::new(Culture::new("en-US"))
            .with_translation(Culture::new("en-US"), "sections", "content", "Content")
            .with_translation(Culture::new("en-US"), "sections", "media", "Media")
            .with_translation(Culture::new("da-DK"), "sections", "content", "Indhold")
            .with_translation(Culture::new("en-US"), "content", "contentRoot", "Content")
            .with_translation(Culture::new("en-US"), "media", "mediaRoot", "Media")
            .with_translation(Culture::new("en-US"), "auditTrails", "save", "Content saved"),
    );

    let section_service = Arc::new(InMemorySectionService::new(vec![
        Section::new("content", 0),
        Section::new("media", 10),
        Section::new("settings", 20),
    ]));

    let url_provider = Arc::new(RoutingUrlProvider::new(content_service.clone()));

    let security = Arc::new(match current_user {
        Some(user) => FixedSecurityAccessor::for_user(user),
        None => FixedSecurityAccessor::anonymous(),
    });

    let property_editors = Arc::new(PropertyEditorCollection::new(vec![
        PropertyEditor::new("Quill.RichText", "Rich Text", ValueStorageType::Ntext),
        PropertyEditor::new("Quill.TextBox", "Text Box", ValueStorageType::Nvarchar),
        PropertyEditor::new("Quill.Legacy", "Ancient Editor", ValueStorageType::Ntext).deprecated(),
    ]));

    let services = BackofficeServices {
        content: content_service,
        media: Arc::new(InMemoryMediaService::new(Vec::new())),
        content_types: content_type_service,
        templates: template_service,
        users: user_service,
        languages: language_service,
        text: text_service,
        sections: section_service,
        urls: url_provider,
        security,
        property_editors,
        settings: BackofficeSettings::default(),
    };

    let mapper = build_backoffice_mapper(&services).expect("map definitions register once");

    let redirect = RedirectUrl::new(widget.id, widget.key, "/products/old-widget/");
    let dangling_redirect = RedirectUrl::new(ContentId::new(9999), uuid::Uuid::new_v4(), "/gone/");

    Fixture {
        mapper,
        editor,
        admin,
        home,
        products,
        widget,
        article_type,
        redirect,
        dangling_redirect,
    }
}

/// Builds the composed mapper with the editor as the current user.
pub fn fixture() -> Fixture {
    let editor = editor_user();
    fixture_with_user(Some(editor))
}
