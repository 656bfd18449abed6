//! Composition of sparse asset filters into one search.
//!
//! Every present filter contributes exactly one [`AssetPredicate`]; absent or
//! blank filters contribute nothing. The predicates are pure intersections, so
//! their order never changes the result set. Caller options (ordering and
//! pagination) are kept apart and applied after all predicates.

use chrono::NaiveDateTime;

use crate::domain::asset::Asset;
use crate::domain::errors::ConfigurationError;
use crate::domain::types::{AssetKind, AssetTypeId, VisibilityLabel};
use crate::domain::visibility::VisibilityRegistry;
use crate::pagination::Pagination;

/// Optional search criteria. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilters {
    /// Category must be one of these.
    pub asset_type_ids: Option<Vec<AssetTypeId>>,
    /// Substring searched in name and description.
    pub text: Option<String>,
    pub visibility: Option<VisibilityLabel>,
    /// Inclusive lower bound on `created_at`.
    pub created_start: Option<NaiveDateTime>,
    /// Inclusive upper bound on `created_at`.
    pub created_end: Option<NaiveDateTime>,
}

impl AssetFilters {
    pub fn asset_types(mut self, ids: impl IntoIterator<Item = AssetTypeId>) -> Self {
        self.asset_type_ids = Some(ids.into_iter().collect());
        self
    }
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
    pub fn visibility(mut self, label: VisibilityLabel) -> Self {
        self.visibility = Some(label);
        self
    }
    pub fn created_start(mut self, start: NaiveDateTime) -> Self {
        self.created_start = Some(start);
        self
    }
    pub fn created_end(mut self, end: NaiveDateTime) -> Self {
        self.created_end = Some(end);
        self
    }
}

/// A single restriction on the asset collection.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetPredicate {
    /// Category is one of the ids. An empty list matches nothing.
    AssetTypeIn(Vec<AssetTypeId>),
    /// Name or description contains the text, ignoring case.
    Text(String),
    Kind(AssetKind),
    CreatedFrom(NaiveDateTime),
    CreatedUntil(NaiveDateTime),
}

impl AssetPredicate {
    pub fn matches(&self, asset: &Asset) -> bool {
        match self {
            Self::AssetTypeIn(ids) => ids.contains(&asset.asset_type_id),
            Self::Text(text) => {
                let needle = fold_case(text);
                fold_case(asset.name.as_str()).contains(&needle)
                    || asset
                        .description
                        .as_ref()
                        .is_some_and(|d| fold_case(d.as_str()).contains(&needle))
            }
            Self::Kind(kind) => asset.kind == *kind,
            Self::CreatedFrom(start) => asset.created_at >= *start,
            Self::CreatedUntil(end) => asset.created_at <= *end,
        }
    }
}

/// Case-folded form used for text matching, both in memory and in the
/// stored `search_*` columns.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Result ordering requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetOrder {
    NameAsc,
    NameDesc,
    CreatedAtAsc,
    #[default]
    CreatedAtDesc,
}

/// Caller-supplied base options, applied after every predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub order: AssetOrder,
    pub pagination: Option<Pagination>,
}

impl SearchOptions {
    pub fn order_by(mut self, order: AssetOrder) -> Self {
        self.order = order;
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Predicates plus options, ready to hand to a repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSearch {
    pub predicates: Vec<AssetPredicate>,
    pub options: SearchOptions,
}

impl AssetSearch {
    /// Translates `filters` into predicates in a fixed order: type, text,
    /// visibility, created start, created end.
    ///
    /// Fails only when the visibility label is not registered.
    pub fn compose(
        filters: &AssetFilters,
        options: SearchOptions,
        visibilities: &VisibilityRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut search = Self {
            predicates: Vec::new(),
            options,
        };

        if let Some(ids) = &filters.asset_type_ids {
            search = search.filter(AssetPredicate::AssetTypeIn(ids.clone()));
        }

        if let Some(text) = filters
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        {
            search = search.filter(AssetPredicate::Text(text.to_string()));
        }

        if let Some(label) = &filters.visibility {
            let kind = visibilities.resolve(label)?;
            search = search.filter(AssetPredicate::Kind(kind));
        }

        if let Some(start) = filters.created_start {
            search = search.filter(AssetPredicate::CreatedFrom(start));
        }

        if let Some(end) = filters.created_end {
            search = search.filter(AssetPredicate::CreatedUntil(end));
        }

        Ok(search)
    }

    pub fn filter(mut self, predicate: AssetPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Whether `asset` satisfies every predicate.
    pub fn matches(&self, asset: &Asset) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(asset))
    }
}
