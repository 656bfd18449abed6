//! Resolution of loosely specified asset references.

use crate::domain::asset::Asset;
use crate::domain::types::{AssetId, AssetName};
use crate::repository::{AssetReader, RepositoryResult};

/// Something that may identify an asset: an id, a name or the asset itself.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLookup {
    Id(i32),
    Name(String),
    Record(Box<Asset>),
}

impl From<i32> for AssetLookup {
    fn from(id: i32) -> Self {
        Self::Id(id)
    }
}

impl From<AssetId> for AssetLookup {
    fn from(id: AssetId) -> Self {
        Self::Id(id.get())
    }
}

impl From<&str> for AssetLookup {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AssetLookup {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&AssetName> for AssetLookup {
    fn from(name: &AssetName) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<Asset> for AssetLookup {
    fn from(asset: Asset) -> Self {
        Self::Record(Box::new(asset))
    }
}

/// Resolves `lookup` to an asset.
///
/// Records are returned unchanged without a read. Ids that cannot exist and
/// blank names resolve to `None`, as does anything the repository does not
/// know.
pub fn resolve_asset<R>(repo: &R, lookup: impl Into<AssetLookup>) -> RepositoryResult<Option<Asset>>
where
    R: AssetReader + ?Sized,
{
    match lookup.into() {
        AssetLookup::Record(asset) => Ok(Some(*asset)),
        AssetLookup::Id(id) => match AssetId::new(id) {
            Ok(id) => repo.get_asset_by_id(id),
            Err(_) => Ok(None),
        },
        AssetLookup::Name(name) => {
            if name.trim().is_empty() {
                return Ok(None);
            }
            repo.get_asset_by_name(&name)
        }
    }
}
