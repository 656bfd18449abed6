use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::asset_relation::{
    AssetRelation as DomainAssetRelation, NewAssetRelation as DomainNewAssetRelation,
};
use crate::domain::types::{
    RelatedObjectType, RelationFieldName, RelationPosition, TypeConstraintError,
};

/// Diesel model representing the `asset_relations` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::asset_relations)]
pub struct AssetRelation {
    pub id: i32,
    pub asset_id: i32,
    pub related_object_type: String,
    pub related_object_id: i32,
    pub field_name: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`AssetRelation`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::asset_relations)]
pub struct NewAssetRelation {
    pub asset_id: i32,
    pub related_object_type: String,
    pub related_object_id: i32,
    pub field_name: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<AssetRelation> for DomainAssetRelation {
    type Error = TypeConstraintError;

    fn try_from(relation: AssetRelation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: relation.id.try_into()?,
            asset_id: relation.asset_id.try_into()?,
            related_object_type: RelatedObjectType::new(relation.related_object_type)?,
            related_object_id: relation.related_object_id,
            field_name: RelationFieldName::new(relation.field_name)?,
            position: RelationPosition::new(relation.position)?,
            created_at: relation.created_at,
            updated_at: relation.updated_at,
        })
    }
}

impl From<DomainNewAssetRelation> for NewAssetRelation {
    fn from(relation: DomainNewAssetRelation) -> Self {
        Self {
            asset_id: relation.asset_id.get(),
            related_object_type: relation.related_object_type.into_inner(),
            related_object_id: relation.related_object_id,
            field_name: relation.field_name.into_inner(),
            position: relation.position.get(),
            created_at: relation.created_at,
            updated_at: relation.updated_at,
        }
    }
}
