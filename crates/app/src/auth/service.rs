//! Auth collaborator contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{auth::models::CurrentUser, backend::BackendError};

/// Session capability exposed by the hosted auth collaborator.
///
/// The session may still be resolving at startup; `current_user` returns
/// `None` until one exists.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// The authenticated user attached to the current session, if any.
    async fn current_user(&self) -> Result<Option<CurrentUser>, BackendError>;
}
