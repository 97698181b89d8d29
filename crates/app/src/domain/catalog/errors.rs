//! Catalog service errors.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("catalog record not found")]
    NotFound,

    #[error("not allowed")]
    PermissionDenied,

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for CatalogServiceError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::NotFound => Self::NotFound,
            BackendError::PermissionDenied => Self::PermissionDenied,
            other => Self::Backend(other),
        }
    }
}
