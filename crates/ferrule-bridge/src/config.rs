//! External module metadata configuration.
//!
//! The version string a module reports through introspection comes from
//! outside the code: either a TOML configuration file or the crate version
//! baked in at build time. [`ModuleConfig`] carries those overrides and is
//! applied to a [`ModuleBuilder`](crate::ModuleBuilder) via
//! [`with_config`](crate::ModuleBuilder::with_config).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigResult;

/// Metadata overrides for an extension module.
///
/// All fields are optional; absent fields leave the module's built-in
/// defaults untouched.
///
/// # Example
///
/// ```
/// use ferrule_bridge::ModuleConfig;
///
/// let config = ModuleConfig::from_toml_str(r#"version = "2.0.0""#).unwrap();
/// assert_eq!(config.version.as_deref(), Some("2.0.0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Version string reported through introspection.
    pub version: Option<String>,
    /// Module documentation string.
    pub doc: Option<String>,
}

impl ModuleConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the documentation string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Loading module configuration");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let config = ModuleConfig::new();
        assert_eq!(config.version, None);
        assert_eq!(config.doc, None);
    }

    #[test]
    fn test_parse_toml() {
        let config = ModuleConfig::from_toml_str(
            r#"
            version = "1.2.3"
            doc = "Overridden documentation."
            "#,
        )
        .unwrap();

        assert_eq!(config.version.as_deref(), Some("1.2.3"));
        assert_eq!(config.doc.as_deref(), Some("Overridden documentation."));
    }

    #[test]
    fn test_partial_toml() {
        let config = ModuleConfig::from_toml_str(r#"version = "0.9.0""#).unwrap();
        assert_eq!(config.version.as_deref(), Some("0.9.0"));
        assert_eq!(config.doc, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(ModuleConfig::from_toml_str(r#"verison = "1.0""#).is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = ModuleConfig::new().with_version("3.0.0").with_doc("docs");
        assert_eq!(config.version.as_deref(), Some("3.0.0"));
        assert_eq!(config.doc.as_deref(), Some("docs"));
    }
}
