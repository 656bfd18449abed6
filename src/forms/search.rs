use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::search::AssetFilters;
use crate::domain::types::{AssetTypeId, TypeConstraintError, VisibilityLabel};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw search parameters as received from a request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AssetSearchForm {
    /// Comma separated asset type ids.
    #[serde(rename = "type")]
    pub asset_types: Option<String>,
    #[validate(length(max = 255))]
    pub text: Option<String>,
    #[validate(length(max = 64))]
    pub visibility: Option<String>,
    pub created_start: Option<String>,
    pub created_end: Option<String>,
}

#[derive(Debug, Error)]
pub enum AssetSearchFormError {
    #[error("Asset search form validation failed: {0}")]
    Validation(String),
    #[error("Asset search form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Asset search form contains an invalid asset type id: {0}")]
    InvalidAssetTypeId(String),
    #[error("Asset search form contains an invalid date: {0}")]
    InvalidDate(String),
}

impl From<ValidationErrors> for AssetSearchFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AssetSearchFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_asset_type_ids(value: &str) -> Result<Vec<AssetTypeId>, AssetSearchFormError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| -> Result<AssetTypeId, AssetSearchFormError> {
            let id = segment
                .parse::<i32>()
                .map_err(|_| AssetSearchFormError::InvalidAssetTypeId(segment.to_string()))?;
            Ok(AssetTypeId::new(id)?)
        })
        .collect()
}

/// Parses a date or date-time bound. A bare date covers the whole day, so it
/// becomes midnight for a start bound and the last representable nanosecond
/// for an end bound.
fn parse_bound(value: &str, end_of_day: bool) -> Result<NaiveDateTime, AssetSearchFormError> {
    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date_time);
        }
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AssetSearchFormError::InvalidDate(value.to_string()))?;
    let date_time = if end_of_day {
        date.and_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    date_time.ok_or_else(|| AssetSearchFormError::InvalidDate(value.to_string()))
}

impl TryFrom<AssetSearchForm> for AssetFilters {
    type Error = AssetSearchFormError;

    fn try_from(value: AssetSearchForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let asset_type_ids = non_blank(value.asset_types)
            .map(|ids| parse_asset_type_ids(&ids))
            .transpose()?;
        let visibility = non_blank(value.visibility)
            .map(VisibilityLabel::new)
            .transpose()?;
        let created_start = non_blank(value.created_start)
            .map(|start| parse_bound(&start, false))
            .transpose()?;
        let created_end = non_blank(value.created_end)
            .map(|end| parse_bound(&end, true))
            .transpose()?;

        Ok(Self {
            asset_type_ids,
            text: non_blank(value.text),
            visibility,
            created_start,
            created_end,
        })
    }
}
