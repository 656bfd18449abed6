//! Diesel row types and their conversions to domain entities.

pub mod asset;
pub mod asset_relation;
pub mod asset_type;
