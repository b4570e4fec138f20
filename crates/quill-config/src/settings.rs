//! Backoffice configuration structures.

use serde::{Deserialize, Serialize};

/// Root backoffice configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackofficeSettings {
    /// Global settings.
    #[serde(default)]
    pub global: GlobalSettings,

    /// Security settings.
    #[serde(default)]
    pub security: SecuritySettings,

    /// Content editing settings.
    #[serde(default)]
    pub content: ContentSettings,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// The culture the backoffice UI falls back to when a user has none.
    pub default_ui_culture: String,

    /// The path the backoffice is served from.
    pub backoffice_path: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_ui_culture: "en-US".to_string(),
            backoffice_path: "/backoffice".to_string(),
        }
    }
}

/// Security settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Whether backoffice sessions are renewed on activity.
    pub keep_user_logged_in: bool,

    /// Whether disabled users are hidden from user listings.
    pub hide_disabled_users: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            keep_user_logged_in: true,
            hide_disabled_users: false,
        }
    }
}

/// Content editing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    /// The default tree icon for content without a type icon.
    pub default_icon: String,

    /// How many URLs to resolve per content item at most.
    pub max_urls_per_item: usize,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            default_icon: "icon-document".to_string(),
            max_urls_per_item: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BackofficeSettings::default();
        assert_eq!(settings.global.default_ui_culture, "en-US");
        assert_eq!(settings.global.backoffice_path, "/backoffice");
        assert!(settings.security.keep_user_logged_in);
        assert_eq!(settings.content.max_urls_per_item, 10);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let settings: BackofficeSettings =
            serde_json::from_str(r#"{"global": {"default_ui_culture": "da-DK", "backoffice_path": "/edit"}}"#)
                .unwrap();
        assert_eq!(settings.global.default_ui_culture, "da-DK");
        assert_eq!(settings.global.backoffice_path, "/edit");
        assert!(settings.security.keep_user_logged_in);
    }
}
