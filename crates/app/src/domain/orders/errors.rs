//! Orders service errors.

use carddz::orders::{CheckoutError, StatusChangeError};
use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Status(#[from] StatusChangeError),

    #[error("not allowed")]
    Unauthorized,

    #[error("order not found")]
    NotFound,

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for OrdersServiceError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::NotFound => Self::NotFound,
            BackendError::PermissionDenied => Self::Unauthorized,
            other => Self::Backend(other),
        }
    }
}
