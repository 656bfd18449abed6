pub mod assets;
pub mod errors;
pub mod hooks;
pub mod relations;

pub use errors::{ServiceError, ServiceResult};
