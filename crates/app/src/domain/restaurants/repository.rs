//! Restaurant persistence contract.

use async_trait::async_trait;
use carddz::catalog::RestaurantUuid;
use mockall::automock;

use crate::{
    backend::BackendError,
    domain::restaurants::models::{NewRestaurant, Restaurant, RestaurantUpdate},
};

/// Restaurant CRUD exposed by the hosted backend.
#[automock]
#[async_trait]
pub trait RestaurantsRepository: Send + Sync {
    /// Every registered restaurant, for the public directory.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, BackendError>;

    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Restaurant, BackendError>;

    async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, BackendError>;

    async fn update_restaurant(
        &self,
        restaurant: RestaurantUuid,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, BackendError>;
}
