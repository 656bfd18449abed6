use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::asset::{AssetUpdate, AttachedFile};
use crate::domain::asset_relation::NewAssetRelation;
use crate::domain::types::{
    AssetDescription, AssetId, AssetName, RelatedObjectType, RelationFieldName,
    RelationPosition, TypeConstraintError, VisibilityLabel,
};

fn optional_description(
    value: Option<String>,
) -> Result<Option<AssetDescription>, TypeConstraintError> {
    value
        .filter(|d| !d.trim().is_empty())
        .map(AssetDescription::new)
        .transpose()
}

#[derive(Deserialize, Validate)]
pub struct AddAssetForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub visibility: String,
    pub file_name: String,
    pub content_type: String,
    pub file_size: i64,
}

/// Validated input for creating an asset.
///
/// The attached file is carried as declared; its own errors are reported by
/// the creation service because they also decide whether classification runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AddAssetFormPayload {
    pub name: AssetName,
    pub description: Option<AssetDescription>,
    pub visibility: VisibilityLabel,
    pub resource: AttachedFile,
}

#[derive(Debug, Error)]
pub enum AddAssetFormError {
    #[error("Add asset form validation failed: {0}")]
    Validation(String),
    #[error("Add asset form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddAssetFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddAssetFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddAssetForm> for AddAssetFormPayload {
    type Error = AddAssetFormError;

    fn try_from(value: AddAssetForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: AssetName::new(value.name)?,
            description: optional_description(value.description)?,
            visibility: VisibilityLabel::new(value.visibility)?,
            resource: AttachedFile::new(
                value.file_name.trim(),
                value.content_type.trim(),
                value.file_size,
            ),
        })
    }
}

/// Attribute changes. An empty description clears the stored one.
#[derive(Deserialize, Validate)]
pub struct UpdateAssetForm {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum UpdateAssetFormError {
    #[error("Update asset form validation failed: {0}")]
    Validation(String),
    #[error("Update asset form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateAssetFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateAssetFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateAssetForm> for AssetUpdate {
    type Error = UpdateAssetFormError;

    fn try_from(value: UpdateAssetForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: value.name.map(AssetName::new).transpose()?,
            description: value
                .description
                .map(|d| optional_description(Some(d)))
                .transpose()?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct AttachAssetForm {
    #[validate(range(min = 1))]
    pub asset_id: i32,
    #[validate(length(min = 1))]
    pub related_object_type: String,
    pub related_object_id: i32,
    #[validate(length(min = 1))]
    pub field_name: String,
    #[validate(range(min = 0))]
    pub position: Option<i32>,
}

#[derive(Debug, Error)]
pub enum AttachAssetFormError {
    #[error("Attach asset form validation failed: {0}")]
    Validation(String),
    #[error("Attach asset form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AttachAssetFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AttachAssetFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AttachAssetForm> for NewAssetRelation {
    type Error = AttachAssetFormError;

    fn try_from(value: AttachAssetForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let now = Utc::now().naive_utc();
        Ok(Self {
            asset_id: AssetId::new(value.asset_id)?,
            related_object_type: RelatedObjectType::new(value.related_object_type)?,
            related_object_id: value.related_object_id,
            field_name: RelationFieldName::new(value.field_name)?,
            position: RelationPosition::new(value.position.unwrap_or_default())?,
            created_at: now,
            updated_at: now,
        })
    }
}
