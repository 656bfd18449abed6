use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AssetDescription, AssetId, AssetKind, AssetName, AssetTypeId};

/// File attached to an asset, as declared by the upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachedFile {
    pub file_name: String,
    /// Declared MIME content type, e.g. `image/png`.
    pub content_type: String,
    /// Size in bytes.
    pub file_size: i64,
}

impl AttachedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        file_size: i64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            file_size,
        }
    }

    /// Outstanding validation errors of the upload. Empty when the file is usable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.file_name.trim().is_empty() {
            errors.push("file name can't be blank".to_string());
        }
        if self.content_type.trim().is_empty() {
            errors.push("content type can't be blank".to_string());
        }
        if self.file_size <= 0 {
            errors.push("file can't be empty".to_string());
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// A named resource with one attached file and a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub name: AssetName,
    pub description: Option<AssetDescription>,
    /// Category assigned at creation time by the classifier.
    pub asset_type_id: AssetTypeId,
    pub kind: AssetKind,
    pub resource: AttachedFile,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to insert a new [`Asset`].
///
/// Built only after classification succeeded, so the category is always set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAsset {
    pub name: AssetName,
    pub description: Option<AssetDescription>,
    pub asset_type_id: AssetTypeId,
    pub kind: AssetKind,
    pub resource: AttachedFile,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Attribute changes applied to an existing asset.
///
/// `description: Some(None)` clears the description. Category and kind are
/// fixed at creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetUpdate {
    pub name: Option<AssetName>,
    pub description: Option<Option<AssetDescription>>,
}

impl AssetUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
