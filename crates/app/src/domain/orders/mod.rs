//! Orders

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use models::{OrderRecord, OrderUuid};
pub use repository::OrdersRepository;
pub use service::*;
