//! # Quill Config
//!
//! Layered configuration for the Quill backoffice: TOML files per
//! environment plus `QUILL__`-prefixed environment variables, validated at
//! load and reloadable at runtime.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{BackofficeSettings, ContentSettings, GlobalSettings, SecuritySettings};
