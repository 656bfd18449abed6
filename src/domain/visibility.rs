//! Visibility labels and the asset kinds they select.
//!
//! A label such as `public` names a concrete kind through the type name
//! `"asset_" + label` in camel case (`AssetPublic`). The registry is built once
//! from the configured labels; building fails for labels whose type name is
//! not a known [`AssetKind`], so lookups at request time only ever fail for
//! labels that were never configured.

use crate::domain::errors::ConfigurationError;
use crate::domain::types::{AssetKind, VisibilityLabel};

/// Labels registered when nothing else is configured.
pub const DEFAULT_VISIBILITIES: [&str; 2] = ["public", "private"];

/// Camel-cases `"asset_" + label`: `public` becomes `AssetPublic`.
pub fn visibility_type_name(label: &str) -> String {
    format!("asset_{}", label.trim())
        .split(['_', '-', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Ordered mapping from visibility label to asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityRegistry {
    entries: Vec<(VisibilityLabel, AssetKind)>,
}

impl VisibilityRegistry {
    /// Registers `labels`, failing on the first one that names no asset kind.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(VisibilityLabel, AssetKind)> = Vec::new();
        for label in labels {
            let label = VisibilityLabel::new(label.as_ref())
                .map_err(|e| ConfigurationError::InvalidValue(e.to_string()))?;
            let type_name = visibility_type_name(&label);
            let kind = AssetKind::from_type_name(&type_name).ok_or_else(|| {
                ConfigurationError::UnknownAssetKind {
                    label: label.to_string(),
                    type_name: type_name.clone(),
                }
            })?;
            if !entries.iter().any(|(existing, _)| existing == &label) {
                entries.push((label, kind));
            }
        }
        Ok(Self { entries })
    }

    /// Registry with [`DEFAULT_VISIBILITIES`].
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::new(DEFAULT_VISIBILITIES)
    }

    /// Kind registered for `label`. Unregistered labels are a configuration error.
    pub fn resolve(&self, label: &str) -> Result<AssetKind, ConfigurationError> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(registered, _)| registered.as_str() == label)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ConfigurationError::UnregisteredVisibility(label.to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &VisibilityLabel> {
        self.entries.iter().map(|(label, _)| label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_type_names_from_labels() {
        assert_eq!(visibility_type_name("public"), "AssetPublic");
        assert_eq!(visibility_type_name("private"), "AssetPrivate");
        assert_eq!(visibility_type_name("read_only"), "AssetReadOnly");
    }

    #[test]
    fn resolves_registered_labels() {
        let registry = VisibilityRegistry::standard().unwrap();
        assert_eq!(registry.resolve("public").unwrap(), AssetKind::Public);
        assert_eq!(registry.resolve(" private ").unwrap(), AssetKind::Private);
    }

    #[test]
    fn unregistered_label_is_a_configuration_error() {
        let registry = VisibilityRegistry::standard().unwrap();
        assert_eq!(
            registry.resolve("secret").unwrap_err(),
            ConfigurationError::UnregisteredVisibility("secret".into())
        );
    }

    #[test]
    fn registering_an_unknown_kind_fails_at_startup() {
        let err = VisibilityRegistry::new(["public", "secret"]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownAssetKind {
                label: "secret".into(),
                type_name: "AssetSecret".into(),
            }
        );
    }

    #[test]
    fn registered_but_unconfigured_kind_is_not_resolvable() {
        let registry = VisibilityRegistry::new(["public"]).unwrap();
        assert!(registry.resolve("private").is_err());
        assert_eq!(registry.labels().count(), 1);
    }
}
