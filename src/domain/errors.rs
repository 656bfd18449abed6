use thiserror::Error;

/// Integrity failures of the category rule table, the visibility registry or
/// the category rows backing them.
///
/// These are programming or deployment errors. A correctly initialised process
/// never produces them at runtime, so callers should abort the operation
/// rather than fall back to a default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The fallback category is not part of the rule table.
    #[error("fallback category `{0}` is missing from the rule table")]
    MissingFallbackCategory(String),
    /// The same category key appears twice in the rule table.
    #[error("category `{0}` is declared more than once in the rule table")]
    DuplicateCategoryKey(String),
    /// A rule table key has no matching asset type row.
    #[error("category `{0}` has no asset type record")]
    UnknownCategoryKey(String),
    /// A visibility label was used that was never registered.
    #[error("visibility `{0}` is not registered")]
    UnregisteredVisibility(String),
    /// A label was configured whose derived type name matches no asset kind.
    #[error("visibility `{label}` resolves to `{type_name}`, which is not an asset kind")]
    UnknownAssetKind { label: String, type_name: String },
    /// A label could not be used as a value (blank, malformed).
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}
