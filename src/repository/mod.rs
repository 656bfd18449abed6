use crate::db::{DbConnection, DbPool};
use crate::domain::asset::{Asset, AssetUpdate, NewAsset};
use crate::domain::asset_relation::{AssetRelation, NewAssetRelation};
use crate::domain::asset_type::AssetType;
use crate::domain::search::AssetSearch;
use crate::domain::types::{AssetId, AssetTypeKey};

pub mod asset;
pub mod asset_relation;
pub mod asset_type;
pub mod errors;
pub mod lookup;

pub use errors::{RepositoryError, RepositoryResult};
pub use lookup::{AssetLookup, resolve_asset};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for asset entities.
pub trait AssetReader {
    /// Retrieve an asset by its identifier.
    fn get_asset_by_id(&self, id: AssetId) -> RepositoryResult<Option<Asset>>;
    /// Retrieve an asset by exact name.
    fn get_asset_by_name(&self, name: &str) -> RepositoryResult<Option<Asset>>;
    /// Execute a composed search, returning the unpaginated total and the page.
    fn search_assets(&self, search: &AssetSearch) -> RepositoryResult<(usize, Vec<Asset>)>;
}

/// Write operations for asset entities.
pub trait AssetWriter {
    /// Persist a new, already classified asset.
    fn create_asset(&self, asset: &NewAsset) -> RepositoryResult<Asset>;
    /// Apply attribute changes. Fails with `NotFound` for unknown ids.
    fn update_asset(&self, id: AssetId, update: &AssetUpdate) -> RepositoryResult<Asset>;
    /// Delete an asset together with its relations.
    fn delete_asset(&self, id: AssetId) -> RepositoryResult<usize>;
}

/// Read-only operations for asset types (categories).
pub trait AssetTypeReader {
    /// List every asset type ordered by id.
    fn list_asset_types(&self) -> RepositoryResult<Vec<AssetType>>;
    /// Retrieve the asset type registered under `key`.
    fn get_asset_type_by_key(&self, key: &AssetTypeKey) -> RepositoryResult<Option<AssetType>>;
}

/// Read-only operations for asset relations.
pub trait AssetRelationReader {
    /// List relations of an asset ordered by field and position.
    fn list_asset_relations(&self, asset_id: AssetId) -> RepositoryResult<Vec<AssetRelation>>;
}

/// Write operations for asset relations.
pub trait AssetRelationWriter {
    /// Persist a new relation.
    fn create_asset_relation(&self, relation: &NewAssetRelation)
    -> RepositoryResult<AssetRelation>;
}
