//! Catalog

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::CatalogServiceError;
pub use repository::CatalogRepository;
pub use service::*;
