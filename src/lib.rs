//! Core library exports for the media asset service.
//!
//! This crate exposes the asset domain (classification, visibility kinds and
//! filtered search composition), its Diesel persistence layer, input forms and
//! the service functions orchestrating them.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "app")]
pub mod bootstrap;
#[cfg(feature = "app")]
pub mod settings;
