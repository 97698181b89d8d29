//! Auth

pub mod models;
pub mod service;

pub use models::{CurrentUser, UserRole, UserUuid};
pub use service::*;
