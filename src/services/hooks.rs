//! Extension points around asset operations.

use crate::domain::asset::Asset;
use crate::domain::search::AssetFilters;

use super::ServiceResult;

/// Outcome of a filtered search: total matches and the requested page.
pub type SearchOutcome = ServiceResult<(usize, Vec<Asset>)>;

/// Wraps every filtered search.
///
/// Implementations may run code before and after calling `proceed`, rewrite
/// its outcome, or return without calling it at all to veto the search.
pub trait SearchHook {
    fn around_search(
        &self,
        filters: &AssetFilters,
        proceed: &mut dyn FnMut() -> SearchOutcome,
    ) -> SearchOutcome;
}

/// Hook that simply runs the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughSearchHook;

impl SearchHook for PassthroughSearchHook {
    fn around_search(
        &self,
        _filters: &AssetFilters,
        proceed: &mut dyn FnMut() -> SearchOutcome,
    ) -> SearchOutcome {
        proceed()
    }
}

/// Notified once after each successful, persisted attribute update.
pub trait AssetUpdateHook {
    fn after_update(&self, asset: &Asset);
}

/// Update hook that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingUpdateHook;

impl AssetUpdateHook for LoggingUpdateHook {
    fn after_update(&self, asset: &Asset) {
        log::info!("Asset {} updated", asset.id);
    }
}
