use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::asset::{
    Asset as DomainAsset, AssetUpdate as DomainAssetUpdate, AttachedFile,
    NewAsset as DomainNewAsset,
};
use crate::domain::search::fold_case;
use crate::domain::types::{AssetDescription, AssetKind, AssetName, TypeConstraintError};

/// Diesel model representing a row in the `assets` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::assets)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub asset_type_id: i32,
    pub kind: String,
    pub resource_file_name: String,
    pub resource_content_type: String,
    pub resource_file_size: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Case-folded copy of `name` matched by text search.
    pub search_name: String,
    pub search_description: Option<String>,
}

/// Insertable form of [`Asset`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::assets)]
pub struct NewAsset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub asset_type_id: i32,
    pub kind: &'static str,
    pub resource_file_name: &'a str,
    pub resource_content_type: &'a str,
    pub resource_file_size: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub search_name: String,
    pub search_description: Option<String>,
}

/// Patch applied by attribute updates. `None` fields are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::assets)]
pub struct AssetChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
    pub search_name: Option<String>,
    pub search_description: Option<Option<String>>,
}

impl TryFrom<Asset> for DomainAsset {
    type Error = TypeConstraintError;

    fn try_from(asset: Asset) -> Result<Self, Self::Error> {
        Ok(Self {
            id: asset.id.try_into()?,
            name: AssetName::new(asset.name)?,
            description: asset
                .description
                .filter(|d| !d.trim().is_empty())
                .map(AssetDescription::new)
                .transpose()?,
            asset_type_id: asset.asset_type_id.try_into()?,
            kind: AssetKind::try_from(asset.kind)?,
            resource: AttachedFile {
                file_name: asset.resource_file_name,
                content_type: asset.resource_content_type,
                file_size: asset.resource_file_size,
            },
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewAsset> for NewAsset<'a> {
    fn from(asset: &'a DomainNewAsset) -> Self {
        Self {
            name: asset.name.as_str(),
            description: asset.description.as_ref().map(|d| d.as_str()),
            asset_type_id: asset.asset_type_id.get(),
            kind: asset.kind.type_name(),
            resource_file_name: asset.resource.file_name.as_str(),
            resource_content_type: asset.resource.content_type.as_str(),
            resource_file_size: asset.resource.file_size,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
            search_name: fold_case(asset.name.as_str()),
            search_description: asset.description.as_ref().map(|d| fold_case(d.as_str())),
        }
    }
}

impl<'a> AssetChangeset<'a> {
    pub fn new(update: &'a DomainAssetUpdate, updated_at: NaiveDateTime) -> Self {
        Self {
            name: update.name.as_ref().map(|n| n.as_str()),
            description: update
                .description
                .as_ref()
                .map(|d| d.as_ref().map(|d| d.as_str())),
            updated_at,
            search_name: update.name.as_ref().map(|n| fold_case(n.as_str())),
            search_description: update
                .description
                .as_ref()
                .map(|d| d.as_ref().map(|d| fold_case(d.as_str()))),
        }
    }
}
