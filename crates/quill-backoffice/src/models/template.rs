//! Template editing models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The template editor model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDisplay {
    /// Node ID.
    pub id: i32,
    /// Stable UUID key.
    pub key: Uuid,
    /// Unique alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Alias of the master template this one extends, if any.
    pub master_template_alias: Option<String>,
    /// Whether other templates extend this one.
    pub is_master_template: bool,
    /// The template markup.
    pub content: String,
    /// Path of the template file relative to the views directory.
    pub virtual_path: String,
}
