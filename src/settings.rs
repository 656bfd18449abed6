//! Process settings loaded from YAML and the environment.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::classification::{CategoryRule, CategoryRuleTable, DEFAULT_FALLBACK_CATEGORY};
use crate::domain::errors::ConfigurationError;
use crate::domain::types::AssetTypeKey;
use crate::domain::visibility::{DEFAULT_VISIBILITIES, VisibilityRegistry};

/// Prefix of environment variables overriding file settings (`MEDIA_DATABASE_URL`).
pub const ENV_PREFIX: &str = "MEDIA";

/// One configured category with its content-type fragments.
#[derive(Debug, Clone, Deserialize)]
pub struct MimeTypeRule {
    pub key: String,
    #[serde(default)]
    pub content_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,
    #[serde(default = "default_visibilities")]
    pub visibilities: Vec<String>,
    /// Kept as a sequence so declaration order survives deserialization.
    pub mime_types: Vec<MimeTypeRule>,
}

fn default_fallback_category() -> String {
    DEFAULT_FALLBACK_CATEGORY.to_string()
}

fn default_visibilities() -> Vec<String> {
    DEFAULT_VISIBILITIES.iter().map(|v| v.to_string()).collect()
}

impl Settings {
    /// Loads `path` (extension optional) and applies `MEDIA_*` overrides.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Parses settings from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    /// Builds the validated category rule table.
    pub fn rule_table(&self) -> Result<CategoryRuleTable, ConfigurationError> {
        let invalid = |e: crate::domain::types::TypeConstraintError| {
            ConfigurationError::InvalidValue(e.to_string())
        };

        let rules = self
            .mime_types
            .iter()
            .map(|rule| {
                AssetTypeKey::new(rule.key.as_str())
                    .map(|key| CategoryRule::new(key, rule.content_types.iter().cloned()))
                    .map_err(invalid)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let fallback = AssetTypeKey::new(self.fallback_category.as_str()).map_err(invalid)?;

        CategoryRuleTable::new(rules, fallback)
    }

    /// Builds the visibility registry from the configured labels.
    pub fn visibility_registry(&self) -> Result<VisibilityRegistry, ConfigurationError> {
        VisibilityRegistry::new(&self.visibilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AssetKind;

    const DEFAULT_SETTINGS: &str = include_str!("../config/default.yaml");

    #[test]
    fn default_settings_build_a_valid_table() {
        let settings = Settings::from_yaml(DEFAULT_SETTINGS).unwrap();
        let table = settings.rule_table().unwrap();

        let keys: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["image", "video", "doc", "audio", "flash", "other"]);
        assert_eq!(table.classify("image/png").as_str(), "image");
        assert_eq!(table.classify("application/pdf").as_str(), "doc");
        assert_eq!(table.classify("application/zip").as_str(), "other");
    }

    #[test]
    fn default_settings_register_public_and_private() {
        let settings = Settings::from_yaml(DEFAULT_SETTINGS).unwrap();
        let registry = settings.visibility_registry().unwrap();

        assert_eq!(registry.resolve("public").unwrap(), AssetKind::Public);
        assert_eq!(registry.resolve("private").unwrap(), AssetKind::Private);
    }

    #[test]
    fn missing_fallback_rule_is_rejected() {
        let settings = Settings::from_yaml(
            "database_url: media.db\nmime_types:\n  - key: image\n    content_types: [image]\n",
        )
        .unwrap();

        assert_eq!(
            settings.rule_table().unwrap_err(),
            ConfigurationError::MissingFallbackCategory("other".into())
        );
    }

    #[test]
    fn unknown_visibility_is_rejected_at_startup() {
        let settings = Settings::from_yaml(
            "database_url: media.db\nvisibilities: [public, secret]\nmime_types:\n  - key: other\n",
        )
        .unwrap();

        assert!(matches!(
            settings.visibility_registry().unwrap_err(),
            ConfigurationError::UnknownAssetKind { .. }
        ));
    }
}
