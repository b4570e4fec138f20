//! Configuration loader with layered sources.

use crate::BackofficeSettings;
use config::{Config, Environment, File};
use parking_lot::RwLock;
use quill_core::{QuillError, QuillResult};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    settings: Arc<RwLock<BackofficeSettings>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `QUILL__` prefix
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a source fails to parse or the
    /// merged settings fail validation.
    pub fn new(config_dir: impl Into<String>) -> QuillResult<Self> {
        let config_dir = config_dir.into();
        let settings = Self::load_settings(&config_dir)?;

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::new`].
    pub fn from_default_location() -> QuillResult<Self> {
        Self::new("./config")
    }

    /// Returns the current settings.
    #[must_use]
    pub fn get(&self) -> BackofficeSettings {
        self.settings.read().clone()
    }

    /// Reloads the settings from disk.
    ///
    /// # Errors
    ///
    /// Leaves the current settings untouched and returns the error when
    /// reloading fails.
    pub fn reload(&self) -> QuillResult<()> {
        let new_settings = Self::load_settings(&self.config_dir)?;
        *self.settings.write() = new_settings;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads settings from the specified directory.
    fn load_settings(config_dir: &str) -> QuillResult<BackofficeSettings> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("QUILL_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (QUILL__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("QUILL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| QuillError::configuration(e.to_string()))?;

        let settings: BackofficeSettings = config
            .try_deserialize()
            .map_err(|e| QuillError::configuration(e.to_string()))?;

        Self::validate_settings(&settings)?;

        Ok(settings)
    }

    /// Validates critical settings.
    fn validate_settings(settings: &BackofficeSettings) -> QuillResult<()> {
        if settings.global.default_ui_culture.trim().is_empty() {
            return Err(QuillError::configuration(
                "global.default_ui_culture must not be empty",
            ));
        }
        if !settings.global.backoffice_path.starts_with('/') {
            return Err(QuillError::configuration(format!(
                "global.backoffice_path must start with '/', got '{}'",
                settings.global.backoffice_path
            )));
        }
        if settings.content.max_urls_per_item == 0 {
            return Err(QuillError::configuration(
                "content.max_urls_per_item must be at least 1",
            ));
        }
        Ok(())
    }
}
