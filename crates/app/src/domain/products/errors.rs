//! Products service errors.

use thiserror::Error;

use crate::rest::RestError;

/// Local validation failures, raised before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The draft has no name, or only whitespace.
    #[error("product name is required")]
    MissingName,
}

/// Errors returned by [`ProductsService`](super::ProductsService).
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// A blank name was submitted.
    #[error("product name is required")]
    InvalidName,

    /// No product has the given id.
    #[error("product not found")]
    NotFound,

    /// The record store failed or rejected the request.
    #[error("record store error")]
    Store(#[source] RestError),
}

impl From<RestError> for ProductsServiceError {
    fn from(error: RestError) -> Self {
        Self::Store(error)
    }
}

impl From<ValidationError> for ProductsServiceError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingName => Self::InvalidName,
        }
    }
}
