//! Restaurants

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::RestaurantsServiceError;
pub use models::{NewRestaurant, Restaurant, RestaurantUpdate};
pub use repository::RestaurantsRepository;
pub use service::*;
