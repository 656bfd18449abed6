use serde::{Deserialize, Serialize};

use crate::domain::types::{AssetTypeId, AssetTypeKey};

/// Category record an asset points at. Rows are keyed by the rule table keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetType {
    pub id: AssetTypeId,
    pub key: AssetTypeKey,
}
