use diesel::prelude::*;

use crate::domain::asset_relation::{AssetRelation, NewAssetRelation};
use crate::domain::types::AssetId;
use crate::models::asset_relation::{
    AssetRelation as DbAssetRelation, NewAssetRelation as DbNewAssetRelation,
};
use crate::repository::{
    AssetRelationReader, AssetRelationWriter, DieselRepository, RepositoryResult,
};

impl AssetRelationReader for DieselRepository {
    fn list_asset_relations(&self, asset_id: AssetId) -> RepositoryResult<Vec<AssetRelation>> {
        use crate::schema::asset_relations;

        let mut conn = self.conn()?;

        let items = asset_relations::table
            .filter(asset_relations::asset_id.eq(asset_id.get()))
            .order((
                asset_relations::field_name.asc(),
                asset_relations::position.asc(),
            ))
            .load::<DbAssetRelation>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<AssetRelation>, _>>()?;

        Ok(items)
    }
}

impl AssetRelationWriter for DieselRepository {
    fn create_asset_relation(
        &self,
        relation: &NewAssetRelation,
    ) -> RepositoryResult<AssetRelation> {
        use crate::schema::asset_relations;

        let mut conn = self.conn()?;
        let db_relation: DbNewAssetRelation = relation.clone().into();

        let row = diesel::insert_into(asset_relations::table)
            .values(db_relation)
            .get_result::<DbAssetRelation>(&mut conn)?;

        Ok(row.try_into()?)
    }
}
