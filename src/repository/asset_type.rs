use diesel::prelude::*;

use crate::domain::asset_type::AssetType;
use crate::domain::types::AssetTypeKey;
use crate::models::asset_type::AssetType as DbAssetType;
use crate::repository::{AssetTypeReader, DieselRepository, RepositoryResult};

impl AssetTypeReader for DieselRepository {
    fn list_asset_types(&self) -> RepositoryResult<Vec<AssetType>> {
        use crate::schema::asset_types;

        let mut conn = self.conn()?;

        let items = asset_types::table
            .order(asset_types::id.asc())
            .load::<DbAssetType>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<AssetType>, _>>()?;

        Ok(items)
    }

    fn get_asset_type_by_key(&self, key: &AssetTypeKey) -> RepositoryResult<Option<AssetType>> {
        use crate::schema::asset_types;

        let mut conn = self.conn()?;

        let asset_type = asset_types::table
            .filter(asset_types::key.eq(key.as_str()))
            .first::<DbAssetType>(&mut conn)
            .optional()?;

        Ok(asset_type.map(TryInto::try_into).transpose()?)
    }
}
