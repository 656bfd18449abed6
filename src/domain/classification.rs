//! Content-type based category assignment.
//!
//! A [`CategoryRuleTable`] maps category keys to content-type fragments. The
//! declaration order of the rules is their precedence: the first rule with a
//! fragment equal to one of the `/`-separated components of a content type
//! wins, and the fallback key is used when nothing matches.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::asset::AttachedFile;
use crate::domain::errors::ConfigurationError;
use crate::domain::types::AssetTypeKey;

/// Category key used when no rule matches.
pub const DEFAULT_FALLBACK_CATEGORY: &str = "other";

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub key: AssetTypeKey,
    /// Fragments compared for equality against each content-type component.
    pub content_types: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(key: AssetTypeKey, content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            content_types: content_types.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, components: &[&str]) -> bool {
        self.content_types
            .iter()
            .any(|fragment| components.contains(&fragment.as_str()))
    }
}

/// Ordered, validated rule table. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRuleTable {
    rules: Vec<CategoryRule>,
    fallback: AssetTypeKey,
}

impl CategoryRuleTable {
    /// Builds a table, requiring unique keys and a rule for `fallback`.
    pub fn new(
        rules: Vec<CategoryRule>,
        fallback: AssetTypeKey,
    ) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.key.as_str()) {
                return Err(ConfigurationError::DuplicateCategoryKey(
                    rule.key.to_string(),
                ));
            }
        }
        if !seen.contains(fallback.as_str()) {
            return Err(ConfigurationError::MissingFallbackCategory(
                fallback.into_inner(),
            ));
        }

        Ok(Self { rules, fallback })
    }

    /// Default media table: images, video, documents, audio, flash, other.
    pub fn standard() -> Result<Self, ConfigurationError> {
        let rule = |key: &str, fragments: &[&str]| {
            AssetTypeKey::new(key)
                .map(|key| CategoryRule::new(key, fragments.iter().copied()))
                .map_err(|e| ConfigurationError::InvalidValue(e.to_string()))
        };
        let rules = vec![
            rule("image", &["image"])?,
            rule("video", &["video"])?,
            rule("doc", &["text", "pdf", "msword"])?,
            rule("audio", &["audio"])?,
            rule("flash", &["swf", "x-shockwave-flash"])?,
            rule(DEFAULT_FALLBACK_CATEGORY, &[])?,
        ];
        let fallback = AssetTypeKey::new(DEFAULT_FALLBACK_CATEGORY)
            .map_err(|e| ConfigurationError::InvalidValue(e.to_string()))?;
        Self::new(rules, fallback)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &AssetTypeKey {
        &self.fallback
    }

    /// Every key in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &AssetTypeKey> {
        self.rules.iter().map(|rule| &rule.key)
    }

    /// Category key for `content_type`. Always returns a key.
    pub fn classify(&self, content_type: &str) -> &AssetTypeKey {
        let components: Vec<&str> = content_type.trim().split('/').collect();
        self.rules
            .iter()
            .find(|rule| rule.matches(&components))
            .map(|rule| &rule.key)
            .unwrap_or(&self.fallback)
    }
}

/// Assigns categories to freshly uploaded files.
///
/// Cheap to clone; clones share the same table and may classify in parallel.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<CategoryRuleTable>,
}

impl Classifier {
    pub fn new(table: CategoryRuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &CategoryRuleTable {
        &self.table
    }

    /// Category key for `file`, or `None` while the file still has errors.
    pub fn assign(&self, file: &AttachedFile) -> Option<&AssetTypeKey> {
        if !file.is_valid() {
            return None;
        }
        Some(self.table.classify(&file.content_type))
    }
}
