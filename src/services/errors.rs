use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Caller input failed validation. Nothing was persisted.
    #[error("invalid input: {0}")]
    Form(String),
    /// A value did not satisfy a domain constraint.
    #[error("invalid value: {0}")]
    TypeConstraint(String),
    /// The rule table, visibility registry or category rows are inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
