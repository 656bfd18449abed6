use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AssetId, AssetRelationId, RelatedObjectType, RelationFieldName, RelationPosition,
};

/// Link between an asset and the record using it. Destroyed with the asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRelation {
    pub id: AssetRelationId,
    pub asset_id: AssetId,
    pub related_object_type: RelatedObjectType,
    pub related_object_id: i32,
    pub field_name: RelationFieldName,
    pub position: RelationPosition,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`AssetRelation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAssetRelation {
    pub asset_id: AssetId,
    pub related_object_type: RelatedObjectType,
    pub related_object_id: i32,
    pub field_name: RelationFieldName,
    pub position: RelationPosition,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
