//! Restaurants service errors.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum RestaurantsServiceError {
    #[error("restaurant not found")]
    NotFound,

    #[error("not allowed")]
    Unauthorized,

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for RestaurantsServiceError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::NotFound => Self::NotFound,
            BackendError::PermissionDenied => Self::Unauthorized,
            other => Self::Backend(other),
        }
    }
}
