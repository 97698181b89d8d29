//! Hosted-backend error contract.
//!
//! `BackendError` is the single error shape every hosted-backend collaborator
//! (auth, catalog/order/restaurant persistence) returns. Domain services
//! translate it into their own error enums via `From` impls.

use thiserror::Error;

/// The error shape every hosted-backend collaborator returns.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// The caller is not permitted to perform the operation.
    #[error("permission denied")]
    PermissionDenied,

    /// The backend could not service the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
