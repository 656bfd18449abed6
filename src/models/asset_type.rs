use diesel::prelude::*;

use crate::domain::asset_type::AssetType as DomainAssetType;
use crate::domain::types::{AssetTypeKey, TypeConstraintError};

/// Diesel model representing the `asset_types` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::asset_types)]
pub struct AssetType {
    pub id: i32,
    pub key: String,
}

impl TryFrom<AssetType> for DomainAssetType {
    type Error = TypeConstraintError;

    fn try_from(asset_type: AssetType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: asset_type.id.try_into()?,
            key: AssetTypeKey::new(asset_type.key)?,
        })
    }
}
