//! Template entity.

use crate::id::TemplateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rendering template, optionally nested under a master template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Node ID.
    pub id: TemplateId,

    /// Stable UUID key.
    pub key: Uuid,

    /// Unique alias, e.g. `"blogPost"`.
    pub alias: String,

    /// Display name.
    pub name: String,

    /// The template markup.
    pub content: String,

    /// Alias of the master template this one extends, if any.
    pub master_template_alias: Option<String>,

    /// Whether other templates extend this one.
    pub is_master_template: bool,

    /// Creation timestamp.
    pub create_date: DateTime<Utc>,

    /// Last update timestamp.
    pub update_date: DateTime<Utc>,
}

impl Template {
    /// Creates an empty template.
    #[must_use]
    pub fn new(id: TemplateId, alias: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: Uuid::new_v4(),
            alias: alias.into(),
            name: name.into(),
            content: String::new(),
            master_template_alias: None,
            is_master_template: false,
            create_date: now,
            update_date: now,
        }
    }

    /// The path of the template file relative to the views directory.
    #[must_use]
    pub fn virtual_path(&self) -> String {
        format!("/views/{}.html", self.alias)
    }
}
