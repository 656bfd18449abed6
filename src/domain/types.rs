//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, names and labels are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(AssetId, "Unique identifier for an asset.", "asset_id");
id_newtype!(
    AssetTypeId,
    "Unique identifier for an asset type (category).",
    "asset_type_id"
);
id_newtype!(
    AssetRelationId,
    "Unique identifier for an asset relation.",
    "asset_relation_id"
);

non_empty_string_newtype!(AssetName, "Asset name enforcing non-empty values.", "name");
non_empty_string_newtype!(
    AssetDescription,
    "Asset description enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(
    AssetTypeKey,
    "Category key such as `image` or `other`.",
    "asset type key"
);
non_empty_string_newtype!(
    VisibilityLabel,
    "Visibility label such as `public` selecting a concrete asset kind.",
    "visibility"
);
non_empty_string_newtype!(
    RelatedObjectType,
    "Type name of the record an asset is attached to.",
    "related object type"
);
non_empty_string_newtype!(
    RelationFieldName,
    "Name of the media field holding an asset relation.",
    "field name"
);

/// Position of an asset inside a multi-asset field.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RelationPosition(i32);

impl RelationPosition {
    /// Constructs a position that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("position"))
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Concrete asset subtype selected by a visibility label.
///
/// The persisted form is the type name (`AssetPublic`), which is also what
/// [`crate::domain::visibility::visibility_type_name`] derives from a label.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Public,
    Private,
}

impl AssetKind {
    /// Every kind known to the crate.
    pub const ALL: [AssetKind; 2] = [AssetKind::Public, AssetKind::Private];

    /// Type name used in persistence.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Public => "AssetPublic",
            Self::Private => "AssetPrivate",
        }
    }

    /// Looks up the kind carrying `type_name`.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == type_name)
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl TryFrom<&str> for AssetKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_type_name(value.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("asset kind: {value}")))
    }
}

impl TryFrom<String> for AssetKind {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_asset_names() {
        let value = AssetName::new("  logo  ").unwrap();
        assert_eq!(value.as_str(), "logo");
    }

    #[test]
    fn rejects_blank_names() {
        let err = AssetName::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("name"));
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = AssetId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("asset_id"));
    }

    #[test]
    fn asset_kind_round_trips_type_name() {
        for kind in AssetKind::ALL {
            assert_eq!(AssetKind::try_from(kind.type_name()).unwrap(), kind);
        }
        assert!(AssetKind::try_from("AssetSecret").is_err());
    }

    #[test]
    fn relation_position_rejects_negative_numbers() {
        assert_eq!(
            RelationPosition::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("position")
        );
        assert_eq!(RelationPosition::new(0).unwrap().get(), 0);
    }
}
