//! Shared application services for the Carddz ordering app.
//!
//! Authentication, persistence and file hosting are delegated to a hosted
//! backend; this crate consumes those capabilities as trait contracts and
//! layers the domain services on top of them.

pub mod auth;
pub mod backend;
pub mod context;
pub mod domain;
