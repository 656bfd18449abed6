use crate::domain::asset_relation::{AssetRelation, NewAssetRelation};
use crate::domain::types::AssetId;
use crate::repository::{AssetReader, AssetRelationReader, AssetRelationWriter};

use super::{ServiceError, ServiceResult};

/// Attaches an existing asset to a record field.
pub fn attach_asset<R>(relation: NewAssetRelation, repo: &R) -> ServiceResult<AssetRelation>
where
    R: AssetReader + AssetRelationWriter,
{
    match repo.get_asset_by_id(relation.asset_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get asset: {e}");
            return Err(ServiceError::Internal);
        }
    }

    repo.create_asset_relation(&relation).map_err(|e| {
        log::error!("Failed to create asset relation: {e}");
        ServiceError::Internal
    })
}

/// Lists the relations of an asset.
pub fn show_asset_relations<R>(asset_id: i32, repo: &R) -> ServiceResult<Vec<AssetRelation>>
where
    R: AssetRelationReader,
{
    let asset_id = AssetId::new(asset_id).map_err(|_| ServiceError::NotFound)?;

    repo.list_asset_relations(asset_id).map_err(|e| {
        log::error!("Failed to list asset relations: {e}");
        ServiceError::Internal
    })
}
