//! Domain entities and the pure logic operating on them.

pub mod asset;
pub mod asset_relation;
pub mod asset_type;
pub mod classification;
pub mod errors;
pub mod search;
pub mod types;
pub mod visibility;
