//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here.

use crate::domain::errors::ConfigurationError;
use crate::domain::types::TypeConstraintError;
use crate::forms::assets::{AddAssetFormError, AttachAssetFormError, UpdateAssetFormError};
use crate::forms::search::AssetSearchFormError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<ConfigurationError> for ServiceError {
    fn from(val: ConfigurationError) -> Self {
        ServiceError::Configuration(val.to_string())
    }
}

impl From<AssetSearchFormError> for ServiceError {
    fn from(val: AssetSearchFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddAssetFormError> for ServiceError {
    fn from(val: AddAssetFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateAssetFormError> for ServiceError {
    fn from(val: UpdateAssetFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AttachAssetFormError> for ServiceError {
    fn from(val: AttachAssetFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
