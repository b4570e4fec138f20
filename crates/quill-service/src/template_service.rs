//! Template lookups.

use quill_core::{Template, TemplateId};
use std::collections::HashMap;

/// Lookups into the template store.
pub trait TemplateService: Send + Sync {
    /// Fetches a template by node ID.
    fn get_by_id(&self, id: TemplateId) -> Option<Template>;

    /// Fetches a template by alias.
    fn get_by_alias(&self, alias: &str) -> Option<Template>;
}

/// Template service over a fixed in-memory store.
pub struct InMemoryTemplateService {
    by_id: HashMap<TemplateId, Template>,
}

impl InMemoryTemplateService {
    /// Builds the service from a list of templates.
    #[must_use]
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            by_id: templates.into_iter().map(|t| (t.id, t)).collect(),
        }
    }
}

impl TemplateService for InMemoryTemplateService {
    fn get_by_id(&self, id: TemplateId) -> Option<Template> {
        self.by_id.get(&id).cloned()
    }

    fn get_by_alias(&self, alias: &str) -> Option<Template> {
        self.by_id.values().find(|t| t.alias == alias).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let service =
            InMemoryTemplateService::new(vec![Template::new(TemplateId::new(3001), "blogPost", "Blog Post")]);
        assert!(service.get_by_id(TemplateId::new(3001)).is_some());
        assert!(service.get_by_alias("blogPost").is_some());
        assert!(service.get_by_alias("missing").is_none());
    }
}
